//! Bollinger Bands indicator.
//!
//! Bollinger Bands consist of:
//! - Middle: Simple Moving Average (SMA) over n periods
//! - Upper: Middle + (multiplier × StdDev)
//! - Lower: Middle - (multiplier × StdDev)
//!
//! Where StdDev is population standard deviation (divides by N, not N-1).
//!
//! Default parameters: period=20, multiplier=2.0
//! One band per trailing window: output length is `len - period + 1`.

use crate::domain::indicator::sma;

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_STD_DEV: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBand {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

pub fn bollinger_bands(data: &[f64], period: usize, std_dev: f64) -> Vec<BollingerBand> {
    let middles = sma(data, period);

    data.windows(period.max(1))
        .zip(middles)
        .map(|(window, middle)| {
            let variance: f64 = window
                .iter()
                .map(|v| {
                    let diff = v - middle;
                    diff * diff
                })
                .sum::<f64>()
                / period as f64;
            let sd = variance.sqrt();

            BollingerBand {
                upper: middle + sd * std_dev,
                middle,
                lower: middle - sd * std_dev,
            }
        })
        .collect()
}

pub fn bollinger_bands_default(data: &[f64]) -> Vec<BollingerBand> {
    bollinger_bands(data, DEFAULT_PERIOD, DEFAULT_STD_DEV)
}
