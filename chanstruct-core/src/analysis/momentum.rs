//! Momentum annotation — directional histogram mass per stroke.

use crate::domain::{Direction, Stroke};

/// Assigns each stroke its strength from the MACD histogram.
///
/// For an up stroke spanning bars `[s, e]`, strength is the sum of positive
/// histogram values in the span; for a down stroke, the sum of absolute
/// values of negative histogram values. A stroke whose span falls outside
/// the histogram keeps strength 0.
pub fn assign_stroke_strength(histogram: &[f64], strokes: &mut [Stroke]) {
    for stroke in strokes.iter_mut() {
        if stroke.start_bar >= histogram.len() || stroke.end_bar >= histogram.len() {
            stroke.strength = 0.0;
            continue;
        }
        let span = &histogram[stroke.start_bar..=stroke.end_bar];
        stroke.strength = match stroke.direction {
            Direction::Up => span.iter().filter(|v| **v > 0.0).sum(),
            Direction::Down => span.iter().filter(|v| **v < 0.0).map(|v| -v).sum(),
        };
    }
}
