//! Analyzer thresholds, passed explicitly into every stage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::MacdParams;

/// Invalid threshold parameters, rejected at analyzer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive")]
    NonPositive { name: &'static str },

    #[error("macd periods are invalid (need 1 <= fast < slow, signal >= 1)")]
    InvalidMacd,
}

/// Thresholds for the structural decomposition.
///
/// Deserializable with per-field defaults so a TOML config file may override
/// any subset of fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum input length; shorter series are a fatal input error.
    pub min_bars: usize,
    /// Minimum bar distance between the two fractals of a stroke.
    pub min_bars_per_stroke: usize,
    /// Minimum strokes (connectors included) per segment.
    pub min_strokes_per_segment: usize,
    /// Window size that must overlap before a pivot root forms.
    pub min_units_per_pivot: usize,
    /// Strength ratio below which a more extreme push counts as divergent.
    pub divergence_ratio: f64,
    pub macd: MacdParams,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_bars: 50,
            min_bars_per_stroke: 5,
            min_strokes_per_segment: 3,
            min_units_per_pivot: 3,
            divergence_ratio: 0.8,
            macd: MacdParams::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bars == 0 {
            return Err(ConfigError::NonPositive { name: "min_bars" });
        }
        if self.min_bars_per_stroke == 0 {
            return Err(ConfigError::NonPositive {
                name: "min_bars_per_stroke",
            });
        }
        if self.min_strokes_per_segment == 0 {
            return Err(ConfigError::NonPositive {
                name: "min_strokes_per_segment",
            });
        }
        if self.min_units_per_pivot == 0 {
            return Err(ConfigError::NonPositive {
                name: "min_units_per_pivot",
            });
        }
        if !(self.divergence_ratio > 0.0) || !self.divergence_ratio.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "divergence_ratio",
            });
        }
        if !self.macd.is_valid() {
            return Err(ConfigError::InvalidMacd);
        }
        Ok(())
    }
}
