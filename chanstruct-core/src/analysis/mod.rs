//! The structural decomposition pipeline.
//!
//! Strictly sequential stages, each consuming the finalized output of the
//! previous one: fractals → strokes → momentum → segments → pivots →
//! divergences → turning-point markers. Single-threaded, CPU-bound, no I/O;
//! failure is only possible at the input gate (bar validation) and at
//! analyzer construction (threshold validation).

pub mod config;
pub mod divergence;
pub mod fractals;
pub mod markers;
pub mod momentum;
pub mod pivots;
pub mod result;
pub mod segments;
pub mod strokes;

#[cfg(test)]
pub(crate) mod testkit;

use thiserror::Error;

use crate::domain::{Bar, BarError, BarSeries, PivotLevel};
use crate::indicators;

pub use config::{AnalyzerConfig, ConfigError};
pub use pivots::PriceLeg;
pub use result::Analysis;

/// Why a pipeline run could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Input(#[from] BarError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Runs the pipeline over immutable bar sequences with a fixed config.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Validates the config; non-positive thresholds are rejected here, before
    /// any bars are seen.
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the full pipeline over one bar sequence.
    ///
    /// Validation happens before any stage runs; after that every stage is
    /// total, so a sequence with no qualifying structure yields an `Analysis`
    /// full of empty lists rather than an error.
    pub fn analyze(&self, bars: &[Bar]) -> Result<Analysis, AnalyzeError> {
        let config = &self.config;
        let series = BarSeries::try_new(bars.to_vec(), config.min_bars)?;

        let fractals = fractals::detect_fractals(series.bars());
        let mut strokes = strokes::build_strokes(&fractals, config);

        let hist = indicators::macd::histogram(&series.closes(), config.macd);
        momentum::assign_stroke_strength(&hist, &mut strokes);

        let mut segments = segments::build_segments(&strokes, config);

        let stroke_pivots = pivots::detect_pivots(&strokes, PivotLevel::Stroke, config);
        let segment_pivots = pivots::detect_pivots(&segments, PivotLevel::Segment, config);

        for (i, flag) in divergence::detect_divergences(
            &strokes,
            &stroke_pivots,
            PivotLevel::Stroke,
            config.divergence_ratio,
        ) {
            strokes[i].divergences.push(flag);
        }
        for (i, flag) in divergence::detect_divergences(
            &segments,
            &segment_pivots,
            PivotLevel::Segment,
            config.divergence_ratio,
        ) {
            segments[i].divergences.push(flag);
        }

        markers::classify(&mut strokes, &mut segments, &stroke_pivots, &segment_pivots);

        Ok(Analysis {
            fractals,
            strokes,
            segments,
            stroke_pivots,
            segment_pivots,
            trend_pivots: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testkit::bars_from_closes;

    #[test]
    fn rejects_bad_config_at_construction() {
        let config = AnalyzerConfig {
            min_bars_per_stroke: 0,
            ..AnalyzerConfig::default()
        };
        assert!(Analyzer::new(config).is_err());
    }

    #[test]
    fn rejects_short_series_before_any_stage() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let bars = bars_from_closes(&vec![100.0; 49]);
        let err = analyzer.analyze(&bars).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::Input(BarError::TooShort { got: 49, min: 50 })
        ));
    }

    #[test]
    fn flat_series_yields_empty_structure_not_error() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let bars = bars_from_closes(&vec![100.0; 60]);
        let analysis = analyzer.analyze(&bars).unwrap();
        assert!(analysis.fractals().is_empty());
        assert!(analysis.strokes().is_empty());
        assert!(analysis.segments().is_empty());
        assert!(analysis.stroke_pivots().is_empty());
        assert!(analysis.segment_pivots().is_empty());
        assert!(analysis.trend_pivots().is_empty());
    }
}
