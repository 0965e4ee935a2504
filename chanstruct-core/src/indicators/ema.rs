//! Exponential Moving Average (EMA) over a raw f64 series.
//!
//! Recursive: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1], alpha = 2/(period+1).
//! Seed: EMA[0] = x[0], so every index has a defined value. This is the
//! recursive (non-adjusted) form; the momentum annotator needs a value at
//! every bar because strokes may start anywhere in the series.

/// EMA of `values` with the given period. Empty input yields an empty vec.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "EMA period must be >= 1");
    let mut result = Vec::with_capacity(values.len());
    let alpha = 2.0 / (period as f64 + 1.0);

    let mut prev = match values.first() {
        Some(&first) => first,
        None => return result,
    };
    result.push(prev);

    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }
    result
}
