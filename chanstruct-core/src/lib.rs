//! chanstruct-core — hierarchical structural decomposition of OHLC bar series.
//!
//! The pipeline derives, from an ordered bar sequence:
//! - Fractals (3-bar local extrema)
//! - Strokes (alternating directional legs between fractals)
//! - Segments (merged same-direction stroke runs)
//! - Pivots (overlap zones at stroke and segment level)
//! - Divergences (weaker momentum at a more extreme price)
//! - Turning-point markers (first/second/third-type buy/sell and quasi variants)
//!
//! The whole computation is a pure function of the bar sequence and a small
//! threshold config: single-threaded, deterministic, no I/O.

pub mod analysis;
pub mod domain;
pub mod export;
pub mod indicators;

pub use analysis::{Analysis, AnalyzeError, Analyzer, AnalyzerConfig, ConfigError};
pub use domain::{Bar, BarError};
pub use export::StructureDocument;
