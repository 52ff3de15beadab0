//! Volatility indicators: historical volatility, ATR, simplified VIX.

use crate::domain::indicator::sma;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::stats::sample_variance;

pub const TRADING_DAYS_PER_YEAR: usize = 252;
pub const DEFAULT_ATR_PERIOD: usize = 14;

/// Annualized volatility in percent: `sqrt(sample_var * period) * 100`.
///
/// `period` is the annualization factor (252 for daily returns).
/// Fewer than two returns → `NaN`.
pub fn historical_volatility(returns: &[f64], period: usize) -> f64 {
    (sample_variance(returns) * period as f64).sqrt() * 100.0
}

pub fn historical_volatility_default(returns: &[f64]) -> f64 {
    historical_volatility(returns, TRADING_DAYS_PER_YEAR)
}

/// Average True Range: SMA of the true ranges from the second bar on.
///
/// The slices are read over their common prefix; output length is
/// `len - period` and empty when that is not positive.
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let len = high.len().min(low.len()).min(close.len());

    let true_ranges: Vec<f64> = (1..len)
        .map(|i| {
            let tr1 = high[i] - low[i];
            let tr2 = (high[i] - close[i - 1]).abs();
            let tr3 = (low[i] - close[i - 1]).abs();
            tr1.max(tr2).max(tr3)
        })
        .collect();

    sma(&true_ranges, period)
}

/// [`atr`] over OHLCV bars.
pub fn atr_bars(bars: &[OhlcvBar], period: usize) -> Vec<f64> {
    let true_ranges: Vec<f64> = bars
        .windows(2)
        .map(|w| w[1].true_range(w[0].close))
        .collect();

    sma(&true_ranges, period)
}

/// Simplified variance-swap style volatility index.
///
/// `sqrt(Σ (2 / strike_i) * price_i / time_to_expiry) * 100` over the common
/// prefix of `option_prices` and `strikes`. Illustrative only; not an
/// option-pricing-accurate VIX.
pub fn vix_calculation(option_prices: &[f64], strikes: &[f64], time_to_expiry: f64) -> f64 {
    let variance: f64 = option_prices
        .iter()
        .zip(strikes)
        .map(|(price, strike)| (2.0 / strike) * price)
        .sum();

    (variance / time_to_expiry).sqrt() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bar(day: u32, high: f64, low: f64, close: f64) -> OhlcvBar {
        OhlcvBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high,
            low,
            close,
            volume: 1000,
        }
    }

    #[test]
    fn historical_volatility_known_value() {
        let returns = [0.01, -0.01, 0.01, -0.01];
        // mean 0, sample variance 4e-4 / 3
        let expected = (0.0004 / 3.0 * 252.0_f64).sqrt() * 100.0;
        assert!((historical_volatility_default(&returns) - expected).abs() < 1e-9);
    }

    #[test]
    fn historical_volatility_custom_annualization() {
        let returns = [0.02, 0.0, -0.02];
        let expected = (0.0004 * 52.0_f64).sqrt() * 100.0;
        assert!((historical_volatility(&returns, 52) - expected).abs() < 1e-9);
    }

    #[test]
    fn historical_volatility_constant_returns_is_zero() {
        assert!(historical_volatility_default(&[0.01; 10]).abs() < 1e-9);
    }

    #[test]
    fn historical_volatility_too_short_is_nan() {
        assert!(historical_volatility_default(&[0.01]).is_nan());
        assert!(historical_volatility_default(&[]).is_nan());
    }

    #[test]
    fn atr_basic() {
        let high = [110.0, 115.0, 120.0, 125.0];
        let low = [100.0, 105.0, 110.0, 115.0];
        let close = [105.0, 110.0, 115.0, 120.0];

        let series = atr(&high, &low, &close, 2);
        assert_eq!(series.len(), 2);
        for v in series {
            assert!((v - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn atr_handles_gaps() {
        let high = [110.0, 130.0, 120.0];
        let low = [100.0, 120.0, 110.0];
        let close = [105.0, 125.0, 115.0];

        // TR1 = max(10, 25, 15) = 25, TR2 = max(10, 5, 15) = 15
        let series = atr(&high, &low, &close, 2);
        assert_eq!(series.len(), 1);
        assert!((series[0] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn atr_bars_matches_slices() {
        let bars = vec![
            make_bar(1, 110.0, 100.0, 105.0),
            make_bar(2, 130.0, 120.0, 125.0),
            make_bar(3, 120.0, 110.0, 115.0),
        ];
        let from_bars = atr_bars(&bars, 2);
        let from_slices = atr(
            &[110.0, 130.0, 120.0],
            &[100.0, 120.0, 110.0],
            &[105.0, 125.0, 115.0],
            2,
        );
        assert_eq!(from_bars, from_slices);
    }

    #[test]
    fn atr_insufficient_bars() {
        assert!(atr(&[110.0, 111.0], &[90.0, 91.0], &[100.0, 101.0], 5).is_empty());
        assert!(atr_bars(&[], DEFAULT_ATR_PERIOD).is_empty());
    }

    #[test]
    fn vix_known_value() {
        // (2/100)*5 + (2/50)*2 = 0.1 + 0.08 = 0.18
        let vix = vix_calculation(&[5.0, 2.0], &[100.0, 50.0], 0.5);
        let expected = (0.18_f64 / 0.5).sqrt() * 100.0;
        assert!((vix - expected).abs() < 1e-9);
    }

    #[test]
    fn vix_uses_common_prefix() {
        let a = vix_calculation(&[5.0, 2.0, 9.0], &[100.0, 50.0], 1.0);
        let b = vix_calculation(&[5.0, 2.0], &[100.0, 50.0], 1.0);
        assert_eq!(a, b);
    }
}
