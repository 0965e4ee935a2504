//! Turning-point classification — first/second/third-type markers and their
//! quasi variants.
//!
//! Sub-passes run in order; later passes read markers set by earlier ones.

use crate::domain::{Direction, MarkerLabel, Pivot, Segment, Stroke, TurningPointMarker};

/// Runs all four classification passes over a finished stroke/segment set.
pub fn classify(
    strokes: &mut [Stroke],
    segments: &mut [Segment],
    stroke_pivots: &[Pivot],
    segment_pivots: &[Pivot],
) {
    first_type(strokes, stroke_pivots);
    second_type(segments, segment_pivots);
    third_type(segments, segment_pivots);
    quasi_types(segments);
}

/// A stroke whose divergence is anchored to a pivot and whose end price has
/// already left that pivot's band: `1sell` when an up stroke ends above `zg`,
/// `1buy` when a down stroke ends below `zd`.
fn first_type(strokes: &mut [Stroke], stroke_pivots: &[Pivot]) {
    for stroke in strokes.iter_mut() {
        let Some(p) = stroke.divergences.iter().find_map(|f| f.pivot) else {
            continue;
        };
        let pivot = &stroke_pivots[p];
        let (label, note) = match stroke.direction {
            Direction::Up if stroke.end_price > pivot.zg => (
                MarkerLabel::FirstSell,
                format!("divergent push ends above stroke pivot {p}"),
            ),
            Direction::Down if stroke.end_price < pivot.zd => (
                MarkerLabel::FirstBuy,
                format!("divergent push ends below stroke pivot {p}"),
            ),
            _ => continue,
        };
        stroke.markers.push(TurningPointMarker {
            label,
            pivot: Some(p),
            note,
        });
    }
}

/// Segment analogue of the first-type rule, producing `2buy`/`2sell`.
fn second_type(segments: &mut [Segment], segment_pivots: &[Pivot]) {
    for segment in segments.iter_mut() {
        let Some(p) = segment.divergences.iter().find_map(|f| f.pivot) else {
            continue;
        };
        let pivot = &segment_pivots[p];
        let (label, note) = match segment.direction {
            Direction::Up if segment.end_price > pivot.zg => (
                MarkerLabel::SecondSell,
                format!("divergent push ends above segment pivot {p}"),
            ),
            Direction::Down if segment.end_price < pivot.zd => (
                MarkerLabel::SecondBuy,
                format!("divergent push ends below segment pivot {p}"),
            ),
            _ => continue,
        };
        segment.markers.push(TurningPointMarker {
            label,
            pivot: Some(p),
            note,
        });
    }
}

/// Pivot-retest rule: a breakout segment that started inside the band,
/// followed by a counter-segment that fails to re-enter the pivot. The
/// marker lands on the counter-segment. One marker at most per pivot; the
/// scan for a pivot stops at the first breakout candidate whether or not the
/// retest confirms.
fn third_type(segments: &mut [Segment], segment_pivots: &[Pivot]) {
    for pivot in segment_pivots {
        let Some(last_inside) = segments
            .iter()
            .rposition(|s| pivot.start_time <= s.start_time && s.end_time <= pivot.end_time)
        else {
            continue;
        };

        let mut k = last_inside + 1;
        while k < segments.len() {
            let seg = &segments[k];
            let starts_inside = pivot.zd < seg.start_price && seg.start_price < pivot.zg;

            match seg.direction {
                Direction::Up if starts_inside && seg.high() > pivot.zg => {
                    if let Some(m) =
                        (k + 1..segments.len()).find(|&m| segments[m].direction == Direction::Down)
                    {
                        if segments[m].low() > pivot.zd {
                            let p = pivot.index;
                            segments[m].markers.push(TurningPointMarker {
                                label: MarkerLabel::ThirdBuy,
                                pivot: Some(p),
                                note: format!("pullback holds above segment pivot {p}"),
                            });
                        }
                    }
                    break;
                }
                Direction::Down if starts_inside && seg.low() < pivot.zd => {
                    if let Some(m) =
                        (k + 1..segments.len()).find(|&m| segments[m].direction == Direction::Up)
                    {
                        if segments[m].high() < pivot.zg {
                            let p = pivot.index;
                            segments[m].markers.push(TurningPointMarker {
                                label: MarkerLabel::ThirdSell,
                                pivot: Some(p),
                                note: format!("rebound stays below segment pivot {p}"),
                            });
                        }
                    }
                    break;
                }
                _ => k += 1,
            }
        }
    }
}

/// Base (non-quasi) second/third marker on a segment, if any; the latest one
/// wins when a segment carries several.
fn base_marker(segment: &Segment, buy_side: bool) -> Option<(MarkerLabel, Option<usize>)> {
    segment
        .markers
        .iter()
        .rev()
        .find(|m| {
            matches!(
                m.label,
                MarkerLabel::SecondBuy
                    | MarkerLabel::SecondSell
                    | MarkerLabel::ThirdBuy
                    | MarkerLabel::ThirdSell
            ) && m.label.is_buy() == buy_side
        })
        .map(|m| (m.label, m.pivot))
}

/// Quasi-second/quasi-third markers: pattern continuation.
///
/// Per side, track the most recent segment carrying a base second/third
/// marker. A later same-direction segment whose price range overlaps the
/// tracked segment's range, with an improved extreme (higher low on the buy
/// side, lower high on the sell side), earns the matching quasi label. Quasi
/// markers never become the tracked segment themselves.
fn quasi_types(segments: &mut [Segment]) {
    let mut tracked_buy: Option<(usize, MarkerLabel, Option<usize>)> = None;
    let mut tracked_sell: Option<(usize, MarkerLabel, Option<usize>)> = None;

    for i in 0..segments.len() {
        let own_buy = base_marker(&segments[i], true);
        let own_sell = base_marker(&segments[i], false);

        if own_buy.is_none() {
            if let Some((t, label, pivot)) = tracked_buy {
                let anchor = (
                    segments[t].direction,
                    segments[t].low(),
                    segments[t].high(),
                );
                let seg = &segments[i];
                let overlaps = seg.low() <= anchor.2 && anchor.1 <= seg.high();
                if seg.direction == anchor.0 && overlaps && seg.low() > anchor.1 {
                    let quasi = if label == MarkerLabel::SecondBuy {
                        MarkerLabel::QuasiSecondBuy
                    } else {
                        MarkerLabel::QuasiThirdBuy
                    };
                    segments[i].markers.push(TurningPointMarker {
                        label: quasi,
                        pivot,
                        note: format!("higher low continues segment {t}"),
                    });
                }
            }
        }
        if own_sell.is_none() {
            if let Some((t, label, pivot)) = tracked_sell {
                let anchor = (
                    segments[t].direction,
                    segments[t].low(),
                    segments[t].high(),
                );
                let seg = &segments[i];
                let overlaps = seg.low() <= anchor.2 && anchor.1 <= seg.high();
                if seg.direction == anchor.0 && overlaps && seg.high() < anchor.2 {
                    let quasi = if label == MarkerLabel::SecondSell {
                        MarkerLabel::QuasiSecondSell
                    } else {
                        MarkerLabel::QuasiThirdSell
                    };
                    segments[i].markers.push(TurningPointMarker {
                        label: quasi,
                        pivot,
                        note: format!("lower high continues segment {t}"),
                    });
                }
            }
        }

        if let Some((label, pivot)) = own_buy {
            tracked_buy = Some((i, label, pivot));
        }
        if let Some((label, pivot)) = own_sell {
            tracked_sell = Some((i, label, pivot));
        }
    }
}
