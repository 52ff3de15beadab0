//! OHLCV bar representation and price/return series helpers.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl OhlcvBar {
    /// Widest of the bar's own range and the gaps from `prev_close`.
    pub fn true_range(&self, prev_close: f64) -> f64 {
        let range = self.high - self.low;
        let gap_high = (self.high - prev_close).abs();
        let gap_low = (self.low - prev_close).abs();
        range.max(gap_high).max(gap_low)
    }
}

pub fn closes(bars: &[OhlcvBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

pub fn highs(bars: &[OhlcvBar]) -> Vec<f64> {
    bars.iter().map(|b| b.high).collect()
}

pub fn lows(bars: &[OhlcvBar]) -> Vec<f64> {
    bars.iter().map(|b| b.low).collect()
}

/// Fractional changes `(p[i] - p[i-1]) / p[i-1]`; one shorter than `prices`.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Log changes `ln(p[i] / p[i-1])`; one shorter than `prices`.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}
