//! Fractal detection — 3-bar local extrema.

use crate::domain::{Bar, Fractal, FractalKind};

/// Scans interior bars for peaks and troughs.
///
/// For interior bar `i` (against its two neighbors):
/// - peak:   high[i] > high[i-1], high[i] > high[i+1], low[i] >= low[i-1]
/// - trough: low[i] < low[i-1], low[i] < low[i+1], high[i] <= high[i-1]
///
/// The conditions on the left neighbor make the two kinds mutually
/// exclusive. Fewer than 3 bars yields an empty list.
pub fn detect_fractals(bars: &[Bar]) -> Vec<Fractal> {
    let mut fractals = Vec::new();
    if bars.len() < 3 {
        return fractals;
    }

    for i in 1..bars.len() - 1 {
        let (prev, cur, next) = (&bars[i - 1], &bars[i], &bars[i + 1]);

        if cur.high > prev.high && cur.high > next.high && cur.low >= prev.low {
            fractals.push(Fractal {
                bar_index: i,
                kind: FractalKind::Peak,
                price: cur.high,
                timestamp: cur.timestamp,
            });
        } else if cur.low < prev.low && cur.low < next.low && cur.high <= prev.high {
            fractals.push(Fractal {
                bar_index: i,
                kind: FractalKind::Trough,
                price: cur.low,
                timestamp: cur.timestamp,
            });
        }
    }
    fractals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testkit::bars_from_ohlc;

    #[test]
    fn monotone_rise_has_no_fractals() {
        // Strictly rising highs and lows: no interior bar is a local extreme.
        let bars = bars_from_ohlc(&[
            (100.0, 101.0, 99.0),
            (101.0, 102.0, 100.0),
            (102.0, 103.0, 101.0),
            (103.0, 104.0, 102.0),
        ]);
        assert!(detect_fractals(&bars).is_empty());
    }

    #[test]
    fn detects_single_peak() {
        let bars = bars_from_ohlc(&[
            (100.0, 101.0, 99.0),
            (102.0, 104.0, 100.0), // local top
            (101.0, 102.0, 99.5),
        ]);
        let fractals = detect_fractals(&bars);
        assert_eq!(fractals.len(), 1);
        assert_eq!(fractals[0].kind, FractalKind::Peak);
        assert_eq!(fractals[0].bar_index, 1);
        assert_eq!(fractals[0].price, 104.0);
    }

    #[test]
    fn detects_single_trough() {
        let bars = bars_from_ohlc(&[
            (100.0, 101.0, 99.0),
            (98.0, 100.0, 96.0), // local bottom
            (99.0, 101.5, 97.0),
        ]);
        let fractals = detect_fractals(&bars);
        assert_eq!(fractals.len(), 1);
        assert_eq!(fractals[0].kind, FractalKind::Trough);
        assert_eq!(fractals[0].price, 96.0);
    }

    #[test]
    fn peak_rejected_when_low_dips_below_prior() {
        // Higher high than both neighbors, but the low undercuts the prior
        // bar's low, so the bar is not a clean peak.
        let bars = bars_from_ohlc(&[
            (100.0, 101.0, 99.0),
            (102.0, 104.0, 98.0),
            (101.0, 102.0, 99.5),
        ]);
        assert!(detect_fractals(&bars).is_empty());
    }

    #[test]
    fn fractals_are_ordered_by_bar_index() {
        let bars = bars_from_ohlc(&[
            (100.0, 101.0, 99.0),
            (102.0, 104.0, 100.0), // peak at 1
            (99.0, 101.0, 97.0),   // trough at 2
            (100.0, 103.0, 98.0),
            (99.0, 101.0, 97.5),
        ]);
        let fractals = detect_fractals(&bars);
        assert!(fractals.windows(2).all(|w| w[0].bar_index < w[1].bar_index));
    }

    #[test]
    fn too_few_bars_is_empty_not_error() {
        let bars = bars_from_ohlc(&[(100.0, 101.0, 99.0), (101.0, 102.0, 100.0)]);
        assert!(detect_fractals(&bars).is_empty());
    }
}
