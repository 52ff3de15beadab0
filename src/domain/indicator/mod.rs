//! Technical indicator implementations.
//!
//! Every function takes plain `f64` slices and returns either a scalar or a
//! freshly allocated series. Degenerate input (empty data, zero period,
//! period longer than the data) yields an empty series or `NaN`, never a
//! panic.
//!
//! - `IndicatorType`: indicator identity + parameters, used for labelling
//! - `MacdOutput`, `BollingerBand`, `StochasticOutput`: multi-line outputs

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;

pub use bollinger::{BollingerBand, bollinger_bands, bollinger_bands_default};
pub use ema::ema;
pub use macd::{MacdOutput, macd, macd_default};
pub use rsi::{RsiZone, rsi, rsi_default, rsi_wilder, rsi_zone};
pub use sma::sma;
pub use stochastic::{StochasticOutput, stochastic, stochastic_default};

use std::fmt;

/// Indicator identity and parameters, rendered as report labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorType {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
    RsiWilder(usize),
    Atr(usize),
    HistoricalVolatility(usize),
    Macd {
        fast: usize,
        slow: usize,
        signal: usize,
    },
    Stochastic {
        k_period: usize,
        d_period: usize,
    },
    Bollinger {
        period: usize,
        std_dev: f64,
    },
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(period) => write!(f, "SMA({})", period),
            IndicatorType::Ema(period) => write!(f, "EMA({})", period),
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
            IndicatorType::RsiWilder(period) => write!(f, "RSI_WILDER({})", period),
            IndicatorType::Atr(period) => write!(f, "ATR({})", period),
            IndicatorType::HistoricalVolatility(period) => write!(f, "HV({})", period),
            IndicatorType::Macd { fast, slow, signal } => {
                write!(f, "MACD({},{},{})", fast, slow, signal)
            }
            IndicatorType::Stochastic { k_period, d_period } => {
                write!(f, "STOCHASTIC({},{})", k_period, d_period)
            }
            IndicatorType::Bollinger { period, std_dev } => {
                write!(f, "BOLLINGER({},{})", period, std_dev)
            }
        }
    }
}
