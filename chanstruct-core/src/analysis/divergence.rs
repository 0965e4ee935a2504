//! Divergence detection — weaker momentum at a more extreme price.

use crate::analysis::pivots::PriceLeg;
use crate::domain::{Direction, DivergenceFlag, Pivot, PivotLevel};

/// Finds at most one divergence flag per unit.
///
/// For unit `i` (i >= 2), prior same-direction units sit at `i-2, i-4, …`
/// because directions alternate. Scanning backward, the first prior unit `j`
/// qualifies when the current unit's end price is more extreme (higher for
/// up, lower for down) and its strength is below `ratio` times the prior's,
/// both strengths positive. The flag is associated with the first pivot (in
/// list order) whose time span overlaps the current unit, if any.
///
/// Returns `(unit_index, flag)` pairs in unit order; the caller attaches
/// them to the concrete entity list.
pub fn detect_divergences<U: PriceLeg>(
    units: &[U],
    pivots: &[Pivot],
    level: PivotLevel,
    ratio: f64,
) -> Vec<(usize, DivergenceFlag)> {
    let mut flags = Vec::new();

    for i in 2..units.len() {
        let cur = &units[i];
        let mut j = i - 2;
        loop {
            let prior = &units[j];
            // Segment lists may break alternation after skipped short runs;
            // only same-direction units are comparable.
            let comparable = cur.direction() == prior.direction();

            let more_extreme = match cur.direction() {
                Direction::Up => cur.end_price() > prior.end_price(),
                Direction::Down => cur.end_price() < prior.end_price(),
            };
            let weaker = cur.strength() > 0.0
                && prior.strength() > 0.0
                && cur.strength() < ratio * prior.strength();

            if comparable && more_extreme && weaker {
                let pivot = pivots
                    .iter()
                    .position(|p| p.overlaps_time(cur.start_time(), cur.end_time()));
                flags.push((
                    i,
                    DivergenceFlag {
                        level,
                        divergent: true,
                        pivot,
                        prior_unit: j,
                    },
                ));
                break;
            }
            if j < 2 {
                break;
            }
            j -= 2;
        }
    }
    flags
}
