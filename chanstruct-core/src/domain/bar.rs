//! Bar — the fundamental market data unit — and the validated bar store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLC bar for a single time bucket.
///
/// Timestamps are UTC bucket-open times. Volume is deliberately absent: the
/// structural decomposition only reads price shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Name of the first non-finite price field, if any.
    ///
    /// A NaN or infinite value is how a missing/malformed field surfaces once
    /// the boundary (CSV, JSON) has produced an f64.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        if !self.open.is_finite() {
            Some("open")
        } else if !self.high.is_finite() {
            Some("high")
        } else if !self.low.is_finite() {
            Some("low")
        } else if !self.close.is_finite() {
            Some("close")
        } else {
            None
        }
    }
}

/// Rejection reasons for an input bar sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarError {
    #[error("bar series has {got} bars, minimum is {min}")]
    TooShort { got: usize, min: usize },

    #[error("bar {index} has a non-finite {field} field")]
    NonFinite { index: usize, field: &'static str },

    #[error("bar {index} timestamp does not increase over the previous bar")]
    NonMonotonicTimestamp { index: usize },
}

/// Immutable, validated, time-ordered bar sequence.
///
/// Construction is the single validation gate for the whole pipeline: once a
/// `BarSeries` exists, every downstream stage may assume ordering and
/// finiteness and stays total over its domain.
#[derive(Debug, Clone)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Validates and takes ownership of a bar sequence.
    ///
    /// Rejects: fewer than `min_bars` bars, any non-finite price field, and
    /// timestamps that are not strictly increasing. Out-of-order input is
    /// rejected rather than re-sorted so that identical input always yields
    /// identical output.
    pub fn try_new(bars: Vec<Bar>, min_bars: usize) -> Result<Self, BarError> {
        if bars.len() < min_bars {
            return Err(BarError::TooShort {
                got: bars.len(),
                min: min_bars,
            });
        }
        for (index, bar) in bars.iter().enumerate() {
            if let Some(field) = bar.non_finite_field() {
                return Err(BarError::NonFinite { index, field });
            }
            if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
                return Err(BarError::NonMonotonicTimestamp { index });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices in bar order, for indicator computation.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
