//! Stochastic Oscillator.
//!
//! %K = (close - lowest_low) / (highest_high - lowest_low) * 100 over each
//! trailing `k_period` window, %D = SMA(%K, d_period).
//!
//! The three input slices are read over their common prefix. A window whose
//! high and low coincide has no range and its %K is `NaN`.

use crate::domain::indicator::sma;

pub const DEFAULT_K_PERIOD: usize = 14;
pub const DEFAULT_D_PERIOD: usize = 3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StochasticOutput {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

pub fn stochastic(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    k_period: usize,
    d_period: usize,
) -> StochasticOutput {
    let len = high.len().min(low.len()).min(close.len());
    if k_period == 0 || len < k_period {
        return StochasticOutput::default();
    }

    let k: Vec<f64> = (k_period - 1..len)
        .map(|i| {
            let start = i + 1 - k_period;
            let highest = high[start..=i]
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let lowest = low[start..=i].iter().copied().fold(f64::INFINITY, f64::min);
            (close[i] - lowest) / (highest - lowest) * 100.0
        })
        .collect();

    let d = sma(&k, d_period);
    StochasticOutput { k, d }
}

pub fn stochastic_default(high: &[f64], low: &[f64], close: &[f64]) -> StochasticOutput {
    stochastic(high, low, close, DEFAULT_K_PERIOD, DEFAULT_D_PERIOD)
}
