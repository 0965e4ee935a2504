//! Momentum indicators used by the annotator stage.

pub mod ema;
pub mod macd;

pub use ema::ema;
pub use macd::{histogram, MacdParams};
