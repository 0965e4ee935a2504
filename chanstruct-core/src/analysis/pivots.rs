//! Pivot detection — overlap zones among consecutive units.
//!
//! The detector is generic over the unit list: stroke-level pivots run over
//! strokes, segment-level pivots over segments. `PriceLeg` is the seam.

use chrono::{DateTime, Utc};

use crate::analysis::config::AnalyzerConfig;
use crate::domain::{Direction, Pivot, PivotClass, PivotLevel, Segment, Stroke};

/// A directional price leg: the common face of strokes and segments that the
/// pivot and divergence detectors read.
pub trait PriceLeg {
    fn direction(&self) -> Direction;
    fn start_price(&self) -> f64;
    fn end_price(&self) -> f64;
    fn start_time(&self) -> DateTime<Utc>;
    fn end_time(&self) -> DateTime<Utc>;
    fn strength(&self) -> f64;

    /// Directional price range `(low, high)`: an up leg runs start → end, a
    /// down leg end → start.
    fn range(&self) -> (f64, f64) {
        match self.direction() {
            Direction::Up => (self.start_price(), self.end_price()),
            Direction::Down => (self.end_price(), self.start_price()),
        }
    }
}

impl PriceLeg for Stroke {
    fn direction(&self) -> Direction {
        self.direction
    }
    fn start_price(&self) -> f64 {
        self.start_price
    }
    fn end_price(&self) -> f64 {
        self.end_price
    }
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }
    fn strength(&self) -> f64 {
        self.strength
    }
}

impl PriceLeg for Segment {
    fn direction(&self) -> Direction {
        self.direction
    }
    fn start_price(&self) -> f64 {
        self.start_price
    }
    fn end_price(&self) -> f64 {
        self.end_price
    }
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }
    fn strength(&self) -> f64 {
        self.strength
    }
}

/// Finds non-overlapping pivots in unit-index order.
///
/// At window start `i`, the first `min_units_per_pivot` units must share a
/// band: `zg` = min of their range highs, `zd` = max of their range lows,
/// requiring `zd < zg`. The member set then extends one unit at a time while
/// the next unit's range still intersects `[zd, zg]`. The emitted pivot's
/// `zg`/`zd` come from the defining triple (first three members) and
/// `gg`/`dd` from all extended members. Consumed members are skipped before
/// the scan resumes.
pub fn detect_pivots<U: PriceLeg>(
    units: &[U],
    level: PivotLevel,
    config: &AnalyzerConfig,
) -> Vec<Pivot> {
    let window = config.min_units_per_pivot;
    let mut pivots: Vec<Pivot> = Vec::new();
    let mut i = 0;

    while i + window <= units.len() {
        let seed = &units[i..i + window];
        let zg = seed
            .iter()
            .map(|u| u.range().1)
            .fold(f64::INFINITY, f64::min);
        let zd = seed
            .iter()
            .map(|u| u.range().0)
            .fold(f64::NEG_INFINITY, f64::max);
        if zd >= zg {
            i += 1;
            continue;
        }

        // Extend while the next unit still intersects the band.
        let mut last = i + window - 1;
        while last + 1 < units.len() {
            let (low, high) = units[last + 1].range();
            if low <= zg && high >= zd {
                last += 1;
            } else {
                break;
            }
        }

        // The defining triple fixes the band; the full member set fixes the
        // extremes.
        let triple_len = 3.min(last - i + 1);
        let triple = &units[i..i + triple_len];
        let zg = triple
            .iter()
            .map(|u| u.range().1)
            .fold(f64::INFINITY, f64::min);
        let zd = triple
            .iter()
            .map(|u| u.range().0)
            .fold(f64::NEG_INFINITY, f64::max);
        if zd >= zg {
            // Possible when the seed window is smaller than the triple: the
            // recomputed band can collapse. Not a pivot.
            i += 1;
            continue;
        }
        let members = &units[i..=last];
        let gg = members
            .iter()
            .map(|u| u.range().1)
            .fold(f64::NEG_INFINITY, f64::max);
        let dd = members
            .iter()
            .map(|u| u.range().0)
            .fold(f64::INFINITY, f64::min);

        let class = match (gg > zg, dd < zd) {
            (true, true) => PivotClass::Oscillating,
            (true, false) => PivotClass::Up,
            (false, true) => PivotClass::Down,
            (false, false) => PivotClass::Oscillating,
        };

        pivots.push(Pivot {
            index: pivots.len(),
            level,
            class,
            zg,
            zd,
            gg,
            dd,
            first_unit: i,
            last_unit: last,
            start_time: units[i].start_time(),
            end_time: units[last].end_time(),
        });
        i = last + 1;
    }
    pivots
}
