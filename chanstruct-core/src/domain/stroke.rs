//! Stroke — the minimal directional unit connecting two alternating fractals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::divergence::DivergenceFlag;
use crate::domain::marker::TurningPointMarker;

/// Direction of a stroke or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// A directional leg from one fractal to the next qualifying opposite fractal.
///
/// `start_fractal`/`end_fractal` index into the pipeline's fractal list
/// (back-references, never owning). Strokes alternate direction by
/// construction, and consecutive strokes touch at most at the shared fractal
/// bar. Markers and divergence flags are appended by later stages and frozen
/// once the pipeline returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub index: usize,
    pub direction: Direction,
    pub start_fractal: usize,
    pub end_fractal: usize,
    pub start_price: f64,
    pub end_price: f64,
    pub start_bar: usize,
    pub end_bar: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Directional momentum mass over the bar span. Assigned by the momentum
    /// annotator; zero until then.
    pub strength: f64,
    pub markers: Vec<TurningPointMarker>,
    pub divergences: Vec<DivergenceFlag>,
}

impl Stroke {
    /// Upper edge of the stroke's price range.
    pub fn high(&self) -> f64 {
        self.start_price.max(self.end_price)
    }

    /// Lower edge of the stroke's price range.
    pub fn low(&self) -> f64 {
        self.start_price.min(self.end_price)
    }
}
