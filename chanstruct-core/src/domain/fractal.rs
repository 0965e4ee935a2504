//! Fractal — a local price extremum over a 3-bar window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKind {
    Peak,
    Trough,
}

/// A turning-point candidate anchored to one bar.
///
/// `price` is the bar's high for a peak and its low for a trough. Fractals
/// are created once by the detector and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fractal {
    pub bar_index: usize,
    pub kind: FractalKind,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}
