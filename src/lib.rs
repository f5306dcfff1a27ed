pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, OutputFormat};
pub use crate::core::engine::RecommendationEngine;
pub use crate::core::random::{SeededRandom, ThreadRandom};
pub use domain::category::Category;
pub use domain::coach::Coach;
pub use domain::recommendation::{CoachId, Recommendation};
pub use utils::error::{MenuError, Result};
