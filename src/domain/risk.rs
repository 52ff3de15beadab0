//! Risk indicators: VaR, CVaR, drawdown, risk-adjusted ratios and beta.

use crate::domain::stats::mean;
use crate::domain::volatility::{TRADING_DAYS_PER_YEAR, historical_volatility};

pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.05;
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
pub const DEFAULT_TARGET_RETURN: f64 = 0.0;

/// Historical-simulation Value at Risk.
///
/// Sorts a copy of `returns` ascending and returns the element at
/// `floor(n * confidence_level)`; a negative value is the loss threshold.
/// Empty input or a confidence level outside `(0, 1)` → `NaN`.
pub fn value_at_risk(returns: &[f64], confidence_level: f64) -> f64 {
    if returns.is_empty() || !(confidence_level > 0.0 && confidence_level < 1.0) {
        return f64::NAN;
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let index = (sorted.len() as f64 * confidence_level).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

pub fn value_at_risk_default(returns: &[f64]) -> f64 {
    value_at_risk(returns, DEFAULT_CONFIDENCE_LEVEL)
}

/// Expected shortfall: mean of all returns at or below the VaR threshold.
pub fn conditional_var(returns: &[f64], confidence_level: f64) -> f64 {
    let threshold = value_at_risk(returns, confidence_level);
    if threshold.is_nan() {
        return f64::NAN;
    }

    let tail: Vec<f64> = returns.iter().copied().filter(|&r| r <= threshold).collect();
    mean(&tail)
}

pub fn conditional_var_default(returns: &[f64]) -> f64 {
    conditional_var(returns, DEFAULT_CONFIDENCE_LEVEL)
}

/// Largest peak-to-trough decline, in percent. Empty input → 0.
pub fn max_drawdown(prices: &[f64]) -> f64 {
    let Some(&first) = prices.first() else {
        return 0.0;
    };

    let mut peak = first;
    let mut max_dd = 0.0_f64;

    for &price in &prices[1..] {
        if price > peak {
            peak = price;
        } else {
            let dd = (peak - price) / peak;
            max_dd = max_dd.max(dd);
        }
    }

    max_dd * 100.0
}

/// Annualized Sharpe ratio.
///
/// Excess returns are taken over `risk_free_rate / 252`; the ratio is the
/// annualized mean excess return over the annualized (sample) volatility of
/// the excess returns.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    let daily_rf = risk_free_rate / TRADING_DAYS_PER_YEAR as f64;
    let excess: Vec<f64> = returns.iter().map(|r| r - daily_rf).collect();

    let avg_excess = mean(&excess);
    let volatility = historical_volatility(&excess, TRADING_DAYS_PER_YEAR);

    (avg_excess * TRADING_DAYS_PER_YEAR as f64) / (volatility / 100.0)
}

pub fn sharpe_ratio_default(returns: &[f64]) -> f64 {
    sharpe_ratio(returns, DEFAULT_RISK_FREE_RATE)
}

/// Sortino ratio: mean excess return over downside deviation. Not annualized.
///
/// Downside deviation is `sqrt(Σ e² / k)` over the `k` negative excess
/// returns; with none the ratio is `NaN`.
pub fn sortino_ratio(returns: &[f64], target_return: f64) -> f64 {
    let excess: Vec<f64> = returns.iter().map(|r| r - target_return).collect();
    let avg_excess = mean(&excess);

    let downside: Vec<f64> = excess.iter().copied().filter(|&e| e < 0.0).collect();
    let downside_deviation =
        (downside.iter().map(|e| e * e).sum::<f64>() / downside.len() as f64).sqrt();

    avg_excess / downside_deviation
}

pub fn sortino_ratio_default(returns: &[f64]) -> f64 {
    sortino_ratio(returns, DEFAULT_TARGET_RETURN)
}

/// Sensitivity of `asset_returns` to `market_returns`:
/// `cov(asset, market) / var(market)` over the common prefix.
pub fn beta(asset_returns: &[f64], market_returns: &[f64]) -> f64 {
    let n = asset_returns.len().min(market_returns.len());
    let asset = &asset_returns[..n];
    let market = &market_returns[..n];

    let asset_mean = mean(asset);
    let market_mean = mean(market);

    let mut covariance = 0.0;
    let mut market_variance = 0.0;
    for (a, m) in asset.iter().zip(market) {
        let dm = m - market_mean;
        covariance += (a - asset_mean) * dm;
        market_variance += dm * dm;
    }

    covariance / market_variance
}
