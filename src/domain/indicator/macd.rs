//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! MACD Line = EMA(fast) - EMA(slow)
//! Signal Line = EMA(signal) of MACD Line
//! Histogram = MACD Line - Signal Line
//!
//! Both EMAs are seeded with the first price, so all three lines are as long
//! as the input (minus any `NaN` differences, which are dropped).

use crate::domain::indicator::ema;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacdOutput {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdOutput {
    /// Latest (line, signal, histogram) triple, if any.
    pub fn last(&self) -> Option<(f64, f64, f64)> {
        Some((
            *self.macd_line.last()?,
            *self.signal_line.last()?,
            *self.histogram.last()?,
        ))
    }
}

pub fn macd(data: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdOutput {
    let ema_fast = ema(data, fast);
    let ema_slow = ema(data, slow);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .filter(|v| !v.is_nan())
        .collect();

    let signal_line = ema(&macd_line, signal_period);

    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| m - s)
        .collect();

    MacdOutput {
        macd_line,
        signal_line,
        histogram,
    }
}

pub fn macd_default(data: &[f64]) -> MacdOutput {
    macd(data, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
