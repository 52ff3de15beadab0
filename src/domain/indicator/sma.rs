//! Simple Moving Average.
//!
//! SMA(n)[j] = mean(data[j..j+n]); output length is `len - n + 1`.

/// Trailing simple moving average.
///
/// Returns an empty series when `period == 0` or `period > data.len()`.
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(data.len() - period + 1);
    let mut sum: f64 = data[..period].iter().sum();
    values.push(sum / period as f64);

    for i in period..data.len() {
        sum += data[i] - data[i - period];
        values.push(sum / period as f64);
    }

    values
}
