//! RSI (Relative Strength Index).
//!
//! Two variants with different semantics live here and are kept apart:
//!
//! - [`rsi`]: a single value from the average gain/loss of the **first**
//!   `period` price changes only. No rolling window, no smoothing. This is
//!   the dashboard's historical behaviour and callers depend on it.
//! - [`rsi_wilder`]: the textbook series, seeded with a simple mean over the
//!   first `period` changes and then smoothed as
//!   `avg = (prev_avg * (n-1) + current) / n`.
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))

use std::fmt;

pub const DEFAULT_PERIOD: usize = 14;
pub const DEFAULT_OVERBOUGHT: f64 = 70.0;
pub const DEFAULT_OVERSOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsiZone::Overbought => write!(f, "overbought"),
            RsiZone::Oversold => write!(f, "oversold"),
            RsiZone::Neutral => write!(f, "neutral"),
        }
    }
}

/// Non-rolling RSI over the first `period` changes of `data`.
///
/// - All gains → 100, all losses → 0.
/// - No movement in the window, fewer than two prices, or `period == 0` → `NaN`.
/// - With fewer than `period` changes the available ones are used; the
///   gain/loss ratio does not depend on the divisor.
pub fn rsi(data: &[f64], period: usize) -> f64 {
    if period == 0 || data.len() < 2 {
        return f64::NAN;
    }

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for w in data.windows(2).take(period) {
        let change = w[1] - w[0];
        if change > 0.0 {
            gain_sum += change;
        } else if change < 0.0 {
            loss_sum -= change;
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    // avg_loss == 0 gives an infinite RS and therefore 100; both zero is NaN.
    100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
}

pub fn rsi_default(data: &[f64]) -> f64 {
    rsi(data, DEFAULT_PERIOD)
}

/// Wilder-smoothed RSI series.
///
/// The first value corresponds to `data[period]`; the output has length
/// `data.len() - period` and is empty when `data.len() <= period` or
/// `period == 0`. A window with gains and no losses reads 100; a window
/// with no movement at all is `NaN`.
pub fn rsi_wilder(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() <= period {
        return Vec::new();
    }

    let mut gains: Vec<f64> = Vec::with_capacity(data.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(data.len() - 1);
    for w in data.windows(2) {
        let change = w[1] - w[0];
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    let mut values = Vec::with_capacity(data.len() - period);
    values.push(wilder_value(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        values.push(wilder_value(avg_gain, avg_loss));
    }

    values
}

fn wilder_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        f64::NAN
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

/// Classify an RSI reading against overbought/oversold levels.
/// `NaN` is neutral.
pub fn rsi_zone(value: f64, overbought: f64, oversold: f64) -> RsiZone {
    if value >= overbought {
        RsiZone::Overbought
    } else if value <= oversold {
        RsiZone::Oversold
    } else {
        RsiZone::Neutral
    }
}
