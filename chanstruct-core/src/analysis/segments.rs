//! Segment construction — merging stroke runs with one net direction.

use crate::analysis::config::AnalyzerConfig;
use crate::domain::{Direction, Segment, Stroke};

/// Groups strokes into segments.
///
/// A run starts at stroke `i` and carries its direction. Because strokes
/// alternate, same-direction strokes sit two apart; the run extends across
/// each next same-direction stroke that pushes the run's extreme further
/// (higher end price for up, lower for down) and ends on the last qualifying
/// same-direction stroke. A run of at least `min_strokes_per_segment` strokes
/// (the opposite-direction connectors count) emits one segment and consumes
/// its strokes; a shorter run consumes nothing and the scan advances one
/// stroke.
pub fn build_segments(strokes: &[Stroke], config: &AnalyzerConfig) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut i = 0;

    while i < strokes.len() {
        let direction = strokes[i].direction;
        let mut extreme = strokes[i].end_price;
        let mut last = i;

        let mut k = i + 2;
        while k < strokes.len() {
            let candidate = strokes[k].end_price;
            let extends = match direction {
                Direction::Up => candidate > extreme,
                Direction::Down => candidate < extreme,
            };
            if !extends {
                break;
            }
            extreme = candidate;
            last = k;
            k += 2;
        }

        let run_len = last - i + 1;
        if run_len >= config.min_strokes_per_segment {
            let first_stroke = &strokes[i];
            let last_stroke = &strokes[last];
            segments.push(Segment {
                index: segments.len(),
                direction,
                start_stroke: i,
                end_stroke: last,
                start_price: first_stroke.start_price,
                end_price: last_stroke.end_price,
                start_time: first_stroke.start_time,
                end_time: last_stroke.end_time,
                strength: strokes[i..=last].iter().map(|s| s.strength).sum(),
                markers: Vec::new(),
                divergences: Vec::new(),
            });
            i = last + 1;
        } else {
            i += 1;
        }
    }
    segments
}
