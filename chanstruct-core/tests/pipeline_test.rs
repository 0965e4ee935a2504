//! End-to-end pipeline tests: reference scenarios and structural invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chanstruct_core::analysis::divergence::detect_divergences;
use chanstruct_core::analysis::markers::classify;
use chanstruct_core::domain::{
    Bar, BarError, Direction, Pivot, PivotClass, PivotLevel, Stroke,
};
use chanstruct_core::{AnalyzeError, Analyzer, AnalyzerConfig};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::minutes(i as i64)
}

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            timestamp: ts(i),
            open: close,
            high: close + 0.5,
            low: close - 0.5,
            close,
        })
        .collect()
}

/// Alternating legs of `leg_len` bars: up legs step +2.0, down legs -1.0.
fn sawtooth(legs: usize, leg_len: usize) -> Vec<f64> {
    let mut closes = Vec::new();
    let mut price = 100.0;
    for leg in 0..legs {
        let step = if leg % 2 == 0 { 2.0 } else { -1.0 };
        for _ in 0..leg_len {
            price += step;
            closes.push(price);
        }
    }
    closes
}

fn default_analyzer() -> Analyzer {
    Analyzer::new(AnalyzerConfig::default()).unwrap()
}

// ── Scenario A: monotone rise ────────────────────────────────────────

#[test]
fn monotone_rise_produces_no_structure() {
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64).collect();
    let analysis = default_analyzer().analyze(&bars_from_closes(&closes)).unwrap();
    assert!(analysis.fractals().is_empty());
    assert!(analysis.strokes().is_empty());
    assert!(analysis.segments().is_empty());
    assert!(analysis.stroke_pivots().is_empty());
}

// ── Scenario B: overlapping sawtooth forms a pivot ───────────────────

#[test]
fn sawtooth_forms_pivot_from_first_three_legs() {
    // 12 legs of 6 bars. Leg extremes (close±0.5 envelope): peak 112.5 at
    // bar 5, trough 105.5 at bar 11, peak 118.5 at bar 17, trough 111.5 at
    // bar 23, … so the first three strokes have directional ranges
    // (105.5, 112.5), (105.5, 118.5), (111.5, 118.5).
    let analysis = default_analyzer()
        .analyze(&bars_from_closes(&sawtooth(12, 6)))
        .unwrap();

    assert!(analysis.strokes().len() >= 3);
    let pivots = analysis.stroke_pivots();
    assert!(!pivots.is_empty());
    let first = &pivots[0];
    // zg = min of the three range highs, zd = max of the three range lows.
    assert_eq!(first.zg, 112.5);
    assert_eq!(first.zd, 111.5);
    assert!(first.zd < first.zg);
    assert!(first.gg >= first.zg);
    assert!(first.dd <= first.zd);
}

// ── Scenario C: short input is a fatal error ─────────────────────────

#[test]
fn short_series_is_rejected_before_any_stage() {
    let closes: Vec<f64> = (0..49).map(|i| 100.0 + i as f64).collect();
    let err = default_analyzer()
        .analyze(&bars_from_closes(&closes))
        .unwrap_err();
    assert_eq!(
        err,
        AnalyzeError::Input(BarError::TooShort { got: 49, min: 50 })
    );
}

// ── Scenario D: divergence then first-sell ───────────────────────────

fn leg(index: usize, direction: Direction, start: f64, end: f64, s: usize, e: usize) -> Stroke {
    Stroke {
        index,
        direction,
        start_fractal: index,
        end_fractal: index + 1,
        start_price: start,
        end_price: end,
        start_bar: s,
        end_bar: e,
        start_time: ts(s),
        end_time: ts(e),
        strength: 0.0,
        markers: Vec::new(),
        divergences: Vec::new(),
    }
}

#[test]
fn half_strength_higher_high_yields_one_flag_and_first_sell() {
    let mut strokes = vec![
        leg(0, Direction::Up, 100.0, 110.0, 0, 6),
        leg(1, Direction::Down, 110.0, 103.0, 6, 12),
        leg(2, Direction::Up, 103.0, 115.0, 12, 18),
    ];
    strokes[0].strength = 10.0;
    strokes[1].strength = 4.0;
    strokes[2].strength = 5.0; // 0.5 × the first up leg

    let pivot = Pivot {
        index: 0,
        level: PivotLevel::Stroke,
        class: PivotClass::Oscillating,
        zg: 110.0,
        zd: 103.0,
        gg: 115.0,
        dd: 100.0,
        first_unit: 0,
        last_unit: 2,
        start_time: ts(0),
        end_time: ts(18),
    };

    let flags = detect_divergences(&strokes, &[pivot.clone()], PivotLevel::Stroke, 0.8);
    assert_eq!(flags.len(), 1);
    let (unit, flag) = flags[0];
    assert_eq!(unit, 2);
    assert_eq!(flag.prior_unit, 0);
    assert_eq!(flag.pivot, Some(0));
    strokes[unit].divergences.push(flag);

    // End price 115.0 lies above zg = 110.0, so the classifier adds exactly
    // one first-sell marker.
    classify(&mut strokes, &mut [], &[pivot], &[]);
    let markers: Vec<_> = strokes
        .iter()
        .flat_map(|s| s.markers.iter())
        .collect();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].label.as_str(), "1sell");
}

// ── Cross-cutting invariants ─────────────────────────────────────────

#[test]
fn stroke_directions_alternate() {
    let analysis = default_analyzer()
        .analyze(&bars_from_closes(&sawtooth(12, 6)))
        .unwrap();
    for pair in analysis.strokes().windows(2) {
        assert_ne!(pair[0].direction, pair[1].direction);
    }
}

#[test]
fn stroke_ranges_touch_only_at_shared_fractal() {
    let analysis = default_analyzer()
        .analyze(&bars_from_closes(&sawtooth(12, 6)))
        .unwrap();
    for pair in analysis.strokes().windows(2) {
        assert!(pair[0].end_bar <= pair[1].start_bar);
        if pair[0].end_bar == pair[1].start_bar {
            assert_eq!(pair[0].end_fractal, pair[1].start_fractal);
        }
    }
}

#[test]
fn sequence_indices_are_strictly_increasing() {
    let analysis = default_analyzer()
        .analyze(&bars_from_closes(&sawtooth(12, 6)))
        .unwrap();
    for (i, s) in analysis.strokes().iter().enumerate() {
        assert_eq!(s.index, i);
    }
    for (i, s) in analysis.segments().iter().enumerate() {
        assert_eq!(s.index, i);
    }
    for (i, p) in analysis.stroke_pivots().iter().enumerate() {
        assert_eq!(p.index, i);
    }
}

#[test]
fn pivots_do_not_overlap_in_unit_index() {
    let analysis = default_analyzer()
        .analyze(&bars_from_closes(&sawtooth(12, 6)))
        .unwrap();
    for pair in analysis.stroke_pivots().windows(2) {
        assert!(pair[0].last_unit < pair[1].first_unit);
    }
}

#[test]
fn reruns_are_bit_identical() {
    let bars = bars_from_closes(&sawtooth(12, 6));
    let analyzer = default_analyzer();
    let a = analyzer.analyze(&bars).unwrap();
    let b = analyzer.analyze(&bars).unwrap();
    assert_eq!(a.strokes(), b.strokes());
    assert_eq!(a.segments(), b.segments());
    assert_eq!(a.stroke_pivots(), b.stroke_pivots());
    assert_eq!(a.segment_pivots(), b.segment_pivots());
}

#[test]
fn rising_sawtooth_merges_into_one_up_segment() {
    // Up legs gain 12.0 and down legs give back 6.0, so every up stroke
    // makes a new high: the up run swallows the whole stroke list.
    let analysis = default_analyzer()
        .analyze(&bars_from_closes(&sawtooth(12, 6)))
        .unwrap();
    let segments = analysis.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].direction, Direction::Up);
    assert!(segments[0].stroke_count() >= 3);
}
