//! Exponential Moving Average.
//!
//! k = 2/(n+1), seeded with the first value, then EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! Unlike SMA there is no warmup: the output is as long as the input.

pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.is_empty() {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut values = Vec::with_capacity(data.len());
    let mut ema = data[0];
    values.push(ema);

    for &value in &data[1..] {
        ema = value * k + ema * (1.0 - k);
        values.push(ema);
    }

    values
}
