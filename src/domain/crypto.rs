//! Crypto / alternative-asset indicators.

use std::fmt;

use crate::domain::ohlcv::log_returns;
use crate::domain::stats::mean;
use crate::domain::volatility::historical_volatility;

pub const DEFAULT_REALIZED_VOL_PERIOD: usize = 30;
pub const DEFAULT_HASH_RATE_PERIOD: usize = 14;
pub const FUNDING_WINDOW: usize = 7;
pub const FUNDING_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingSignal {
    Bearish,
    Bullish,
    Neutral,
}

impl fmt::Display for FundingSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundingSignal::Bearish => write!(f, "bearish"),
            FundingSignal::Bullish => write!(f, "bullish"),
            FundingSignal::Neutral => write!(f, "neutral"),
        }
    }
}

/// Network value to transactions ratio.
pub fn nvt(market_cap: f64, transaction_volume: f64) -> f64 {
    market_cap / transaction_volume
}

/// Historical volatility of the last `period` log returns, annualized by
/// `period` itself.
pub fn realized_volatility(prices: &[f64], period: usize) -> f64 {
    let returns = log_returns(prices);
    let start = returns.len().saturating_sub(period);
    historical_volatility(&returns[start..], period)
}

/// Percent change of the latest hash rate versus `period` observations
/// earlier; 0 when the history is too short.
pub fn hash_rate_momentum(hash_rates: &[f64], period: usize) -> f64 {
    if hash_rates.len() <= period {
        return 0.0;
    }
    let current = hash_rates[hash_rates.len() - 1];
    let past = hash_rates[hash_rates.len() - 1 - period];
    ((current - past) / past) * 100.0
}

/// Contrarian read of perpetual funding: a crowded long side (mean of the
/// last 7 rates above 0.01) is bearish, a crowded short side bullish.
pub fn funding_rate_signal(funding_rates: &[f64]) -> FundingSignal {
    let start = funding_rates.len().saturating_sub(FUNDING_WINDOW);
    let average = mean(&funding_rates[start..]);

    if average > FUNDING_THRESHOLD {
        FundingSignal::Bearish
    } else if average < -FUNDING_THRESHOLD {
        FundingSignal::Bullish
    } else {
        FundingSignal::Neutral
    }
}
