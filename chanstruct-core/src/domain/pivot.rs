//! Pivot — a price zone where consecutive same-level units overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which unit list a pivot (or divergence flag) was detected over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotLevel {
    Stroke,
    Segment,
    /// Trend-level pivots are a defined extension point; no detector fills
    /// this level yet.
    Trend,
}

impl PivotLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            PivotLevel::Stroke => "stroke",
            PivotLevel::Segment => "segment",
            PivotLevel::Trend => "trend",
        }
    }
}

/// Net behavior of price around a pivot zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotClass {
    Up,
    Down,
    Oscillating,
}

/// An overlap zone among consecutive units.
///
/// `zg`/`zd` (ceiling/floor) come from the defining triple of members;
/// `gg`/`dd` are the extreme high/low over every extended member. Invariant
/// for every detected pivot: `zd < zg`, `gg >= zg`, `dd <= zd`.
/// `first_unit`/`last_unit` are an inclusive index span into the unit list
/// the pivot was detected over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub index: usize,
    pub level: PivotLevel,
    pub class: PivotClass,
    pub zg: f64,
    pub zd: f64,
    pub gg: f64,
    pub dd: f64,
    pub first_unit: usize,
    pub last_unit: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Pivot {
    /// Number of member units.
    pub fn member_count(&self) -> usize {
        self.last_unit - self.first_unit + 1
    }

    /// True when `[start, end]` intersects the pivot's time span.
    pub fn overlaps_time(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start <= self.end_time && self.start_time <= end
    }
}
