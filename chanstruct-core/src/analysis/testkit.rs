//! Shared builders for stage unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Bar, Direction, Segment, Stroke};

/// Timestamp for synthetic bar `i`: one-minute buckets from a fixed origin.
pub fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap() + Duration::minutes(i as i64)
}

/// Bars from `(close, high, low)` triples; open = close, minute timestamps.
pub fn bars_from_ohlc(rows: &[(f64, f64, f64)]) -> Vec<Bar> {
    rows.iter()
        .enumerate()
        .map(|(i, &(close, high, low))| Bar {
            timestamp: ts(i),
            open: close,
            high,
            low,
            close,
        })
        .collect()
}

/// Bars from closes alone: high/low bracket the close by 0.5.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    bars_from_ohlc(
        &closes
            .iter()
            .map(|&c| (c, c + 0.5, c - 0.5))
            .collect::<Vec<_>>(),
    )
}

/// Bare stroke spanning `[start_bar, end_bar]` with the given prices.
pub fn mk_stroke(
    index: usize,
    direction: Direction,
    start_price: f64,
    end_price: f64,
    start_bar: usize,
    end_bar: usize,
) -> Stroke {
    Stroke {
        index,
        direction,
        start_fractal: index,
        end_fractal: index + 1,
        start_price,
        end_price,
        start_bar,
        end_bar,
        start_time: ts(start_bar),
        end_time: ts(end_bar),
        strength: 0.0,
        markers: Vec::new(),
        divergences: Vec::new(),
    }
}

/// Bare segment; times are derived from the stroke index range as bar indices
/// for simplicity.
pub fn mk_segment(
    index: usize,
    direction: Direction,
    start_price: f64,
    end_price: f64,
    start_stroke: usize,
    end_stroke: usize,
) -> Segment {
    Segment {
        index,
        direction,
        start_stroke,
        end_stroke,
        start_price,
        end_price,
        start_time: ts(start_stroke * 10),
        end_time: ts(end_stroke * 10 + 9),
        strength: 0.0,
        markers: Vec::new(),
        divergences: Vec::new(),
    }
}
