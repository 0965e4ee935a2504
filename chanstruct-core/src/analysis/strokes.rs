//! Stroke construction from the fractal list.

use crate::analysis::config::AnalyzerConfig;
use crate::domain::{Direction, Fractal, FractalKind, Stroke};

/// Connects alternating fractals into directional strokes.
///
/// Walks consecutive fractal pairs and skips a pair when:
/// - the fractals are fewer than `min_bars_per_stroke` bars apart,
/// - both fractals are the same kind (no direction), or
/// - the implied direction repeats the most recently accepted stroke's
///   direction (directions must strictly alternate).
///
/// Trough → peak forms an up stroke, peak → trough a down stroke. Fewer than
/// two fractals yields zero strokes, which is a valid empty result.
pub fn build_strokes(fractals: &[Fractal], config: &AnalyzerConfig) -> Vec<Stroke> {
    let mut strokes: Vec<Stroke> = Vec::new();
    if fractals.len() < 2 {
        return strokes;
    }

    for i in 0..fractals.len() - 1 {
        let (start, end) = (&fractals[i], &fractals[i + 1]);

        if end.bar_index - start.bar_index < config.min_bars_per_stroke {
            continue;
        }
        let direction = match (start.kind, end.kind) {
            (FractalKind::Trough, FractalKind::Peak) => Direction::Up,
            (FractalKind::Peak, FractalKind::Trough) => Direction::Down,
            _ => continue,
        };
        if strokes.last().is_some_and(|s| s.direction == direction) {
            continue;
        }

        strokes.push(Stroke {
            index: strokes.len(),
            direction,
            start_fractal: i,
            end_fractal: i + 1,
            start_price: start.price,
            end_price: end.price,
            start_bar: start.bar_index,
            end_bar: end.bar_index,
            start_time: start.timestamp,
            end_time: end.timestamp,
            strength: 0.0,
            markers: Vec::new(),
            divergences: Vec::new(),
        });
    }
    strokes
}
