//! Segment — a higher-level directional unit over a run of strokes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::divergence::DivergenceFlag;
use crate::domain::marker::TurningPointMarker;
use crate::domain::stroke::Direction;

/// A merged run of strokes carrying one net direction.
///
/// `start_stroke`/`end_stroke` are an inclusive index range into the stroke
/// list (back-reference, not ownership). Direction equals the first member
/// stroke's direction; prices come from the first stroke's start and the last
/// stroke's end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub direction: Direction,
    pub start_stroke: usize,
    pub end_stroke: usize,
    pub start_price: f64,
    pub end_price: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Sum of member stroke strengths.
    pub strength: f64,
    pub markers: Vec<TurningPointMarker>,
    pub divergences: Vec<DivergenceFlag>,
}

impl Segment {
    pub fn high(&self) -> f64 {
        self.start_price.max(self.end_price)
    }

    pub fn low(&self) -> f64 {
        self.start_price.min(self.end_price)
    }

    /// Number of member strokes, connectors included.
    pub fn stroke_count(&self) -> usize {
        self.end_stroke - self.start_stroke + 1
    }
}
