pub mod engine;
pub mod random;

pub use crate::domain::category::Category;
pub use crate::domain::coach::Coach;
pub use crate::domain::ports::{LineReader, RandomSource};
pub use crate::domain::recommendation::{CoachId, Recommendation};
pub use crate::utils::error::Result;
