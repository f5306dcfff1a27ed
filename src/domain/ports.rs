use crate::utils::error::Result;
use async_trait::async_trait;

/// Uniform randomness consumed by the selection engine. `pick_in_range` draws
/// inclusively on both ends; `shuffle` produces an unbiased permutation.
pub trait RandomSource: Send {
    fn pick_in_range(&mut self, min: i32, max: i32) -> i32;
    fn shuffle(&mut self, items: &mut [String]);
}

/// Line-oriented console input. Implementations return `InputClosed` once the
/// underlying stream ends.
#[async_trait]
pub trait LineReader: Send {
    async fn read_line(&mut self) -> Result<String>;
}
