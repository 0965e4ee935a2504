//! Structure document — the flat JSON form of an `Analysis`.
//!
//! One self-contained document per run: stroke and segment rows with their
//! marker/divergence names inlined, the merged pivot list, and the flattened
//! divergence and signal lists. Timestamps are rendered as
//! `YYYY-MM-DD HH:MM:SS` strings for readability.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::Analysis;
use crate::domain::{DivergenceFlag, Pivot, Segment, Stroke, TurningPointMarker};

fn format_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One stroke or segment row.
#[derive(Debug, Clone, Serialize)]
pub struct UnitRow {
    pub index: usize,
    pub direction: &'static str,
    pub start_time: String,
    pub end_time: String,
    pub start_price: f64,
    pub end_price: f64,
    pub high: f64,
    pub low: f64,
    pub strength: f64,
    pub markers: Vec<&'static str>,
    pub divergences: Vec<&'static str>,
}

impl UnitRow {
    fn from_stroke(s: &Stroke) -> Self {
        Self {
            index: s.index,
            direction: s.direction.as_str(),
            start_time: format_time(s.start_time),
            end_time: format_time(s.end_time),
            start_price: s.start_price,
            end_price: s.end_price,
            high: s.high(),
            low: s.low(),
            strength: s.strength,
            markers: s.markers.iter().map(|m| m.label.as_str()).collect(),
            divergences: s.divergences.iter().map(|d| d.level.as_str()).collect(),
        }
    }

    fn from_segment(s: &Segment) -> Self {
        Self {
            index: s.index,
            direction: s.direction.as_str(),
            start_time: format_time(s.start_time),
            end_time: format_time(s.end_time),
            start_price: s.start_price,
            end_price: s.end_price,
            high: s.high(),
            low: s.low(),
            strength: s.strength,
            markers: s.markers.iter().map(|m| m.label.as_str()).collect(),
            divergences: s.divergences.iter().map(|d| d.level.as_str()).collect(),
        }
    }
}

/// One pivot row from the merged stroke/segment/trend pivot lists.
#[derive(Debug, Clone, Serialize)]
pub struct PivotRow {
    pub index: usize,
    pub level: &'static str,
    pub class: &'static str,
    pub zg: f64,
    pub zd: f64,
    pub gg: f64,
    pub dd: f64,
    pub start_time: String,
    pub end_time: String,
}

impl PivotRow {
    fn from_pivot(p: &Pivot) -> Self {
        let class = match p.class {
            crate::domain::PivotClass::Up => "up",
            crate::domain::PivotClass::Down => "down",
            crate::domain::PivotClass::Oscillating => "oscillating",
        };
        Self {
            index: p.index,
            level: p.level.as_str(),
            class,
            zg: p.zg,
            zd: p.zd,
            gg: p.gg,
            dd: p.dd,
            start_time: format_time(p.start_time),
            end_time: format_time(p.end_time),
        }
    }
}

/// One flattened divergence row.
#[derive(Debug, Clone, Serialize)]
pub struct DivergenceRow {
    pub level: &'static str,
    pub unit: usize,
    pub divergent: bool,
    pub pivot: Option<usize>,
}

/// One flattened signal (marker) row.
#[derive(Debug, Clone, Serialize)]
pub struct SignalRow {
    pub name: &'static str,
    pub level: &'static str,
    pub unit: usize,
    pub pivot: Option<usize>,
    pub note: String,
}

impl SignalRow {
    fn new(level: &'static str, unit: usize, m: &TurningPointMarker) -> Self {
        Self {
            name: m.label.as_str(),
            level,
            unit,
            pivot: m.pivot,
            note: m.note.clone(),
        }
    }
}

/// The complete exported document.
#[derive(Debug, Clone, Serialize)]
pub struct StructureDocument {
    pub strokes: Vec<UnitRow>,
    pub segments: Vec<UnitRow>,
    pub pivots: Vec<PivotRow>,
    pub divergences: Vec<DivergenceRow>,
    pub signals: Vec<SignalRow>,
}

impl StructureDocument {
    /// Flattens a finished analysis; pure and repeatable.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let strokes: Vec<UnitRow> = analysis.strokes().iter().map(UnitRow::from_stroke).collect();
        let segments: Vec<UnitRow> = analysis
            .segments()
            .iter()
            .map(UnitRow::from_segment)
            .collect();

        let pivots: Vec<PivotRow> = analysis
            .stroke_pivots()
            .iter()
            .chain(analysis.segment_pivots())
            .chain(analysis.trend_pivots())
            .map(PivotRow::from_pivot)
            .collect();

        let flatten = |unit: usize, flags: &[DivergenceFlag]| -> Vec<DivergenceRow> {
            flags
                .iter()
                .map(|f| DivergenceRow {
                    level: f.level.as_str(),
                    unit,
                    divergent: f.divergent,
                    pivot: f.pivot,
                })
                .collect()
        };
        let mut divergences = Vec::new();
        for s in analysis.strokes() {
            divergences.extend(flatten(s.index, &s.divergences));
        }
        for s in analysis.segments() {
            divergences.extend(flatten(s.index, &s.divergences));
        }

        let mut signals = Vec::new();
        for s in analysis.strokes() {
            signals.extend(s.markers.iter().map(|m| SignalRow::new("stroke", s.index, m)));
        }
        for s in analysis.segments() {
            signals.extend(s.markers.iter().map(|m| SignalRow::new("segment", s.index, m)));
        }

        Self {
            strokes,
            segments,
            pivots,
            divergences,
            signals,
        }
    }
}
