//! The finished structural decomposition.

use serde::Serialize;

use crate::domain::{Fractal, Pivot, Segment, Stroke};

/// Complete output of one pipeline run.
///
/// Built whole by the analyzer and immutable afterward; the accessors may be
/// called any number of times. The caller never sees a partially populated
/// result.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub(crate) fractals: Vec<Fractal>,
    pub(crate) strokes: Vec<Stroke>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) stroke_pivots: Vec<Pivot>,
    pub(crate) segment_pivots: Vec<Pivot>,
    pub(crate) trend_pivots: Vec<Pivot>,
}

impl Analysis {
    pub fn fractals(&self) -> &[Fractal] {
        &self.fractals
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn stroke_pivots(&self) -> &[Pivot] {
        &self.stroke_pivots
    }

    pub fn segment_pivots(&self) -> &[Pivot] {
        &self.segment_pivots
    }

    /// Trend-level pivots. Defined extension point; no detector fills this
    /// level yet, so the list is always empty.
    pub fn trend_pivots(&self) -> &[Pivot] {
        &self.trend_pivots
    }
}
