//! Divergence flag — weakening momentum at a more extreme price.

use serde::{Deserialize, Serialize};

use crate::domain::pivot::PivotLevel;

/// Records that a unit reached a more extreme price than its nearest prior
/// same-direction unit on materially weaker momentum.
///
/// `pivot` is a back-reference (index into the matching pivot list) to the
/// first pivot whose time span overlaps the flagged unit, if any. Flags are
/// only recorded for qualifying comparisons, so `divergent` is always true on
/// stored flags; the field survives for the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceFlag {
    pub level: PivotLevel,
    pub divergent: bool,
    pub pivot: Option<usize>,
    /// Index of the earlier unit the comparison was made against.
    pub prior_unit: usize,
}
