//! MACD histogram — the smoothed-momentum series behind stroke strength.
//!
//! dif[t]  = EMA(close, fast)[t] − EMA(close, slow)[t]
//! dea[t]  = EMA(dif, signal)[t]
//! hist[t] = 2 × (dif[t] − dea[t])
//!
//! The doubled difference matches the charting convention the strength sums
//! were calibrated against.

use serde::{Deserialize, Serialize};

use crate::indicators::ema::ema;

/// Fast/slow/signal periods for the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdParams {
    /// All periods must be at least 1 and fast must stay below slow.
    pub fn is_valid(&self) -> bool {
        self.fast >= 1 && self.signal >= 1 && self.fast < self.slow
    }
}

/// MACD histogram over closing prices, one value per bar.
pub fn histogram(closes: &[f64], params: MacdParams) -> Vec<f64> {
    let fast = ema(closes, params.fast);
    let slow = ema(closes, params.slow);
    let dif: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let dea = ema(&dif, params.signal);
    dif.iter().zip(&dea).map(|(d, e)| 2.0 * (d - e)).collect()
}
