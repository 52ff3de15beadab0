//! Typed parameter records and the indicator default configuration.
//!
//! The indicator functions take plain arguments; these records carry the
//! defaults and are handed over explicitly by callers (the snapshot, the
//! CLI). Nothing reads them implicitly.

use crate::domain::indicator::{bollinger, macd, rsi, stochastic};
use crate::domain::macroeconomic::taylor_rule;
use crate::domain::risk::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RISK_FREE_RATE};
use crate::domain::volatility::{DEFAULT_ATR_PERIOD, TRADING_DAYS_PER_YEAR};

#[derive(Debug, Clone, PartialEq)]
pub struct RsiParams {
    pub period: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self {
            period: rsi::DEFAULT_PERIOD,
            overbought: rsi::DEFAULT_OVERBOUGHT,
            oversold: rsi::DEFAULT_OVERSOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: macd::DEFAULT_FAST,
            slow: macd::DEFAULT_SLOW,
            signal: macd::DEFAULT_SIGNAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerParams {
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: bollinger::DEFAULT_PERIOD,
            std_dev: bollinger::DEFAULT_STD_DEV,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StochasticParams {
    pub k_period: usize,
    pub d_period: usize,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            k_period: stochastic::DEFAULT_K_PERIOD,
            d_period: stochastic::DEFAULT_D_PERIOD,
        }
    }
}

/// Moving-average and range windows reported alongside the oscillators.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub atr_period: usize,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            atr_period: DEFAULT_ATR_PERIOD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarParams {
    pub confidence_level: f64,
}

impl Default for VarParams {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

/// Sharpe always annualizes with 252 trading days; only the
/// risk-free rate is configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct SharpeParams {
    pub risk_free_rate: f64,
}

impl Default for SharpeParams {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityParams {
    /// Periods per year used by historical volatility.
    pub annualization: usize,
}

impl Default for VolatilityParams {
    fn default() -> Self {
        Self {
            annualization: TRADING_DAYS_PER_YEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetaParams {
    pub benchmark_index: String,
}

impl Default for BetaParams {
    fn default() -> Self {
        Self {
            benchmark_index: "SPY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldCurveParams {
    pub short_term: String,
    pub long_term: String,
}

impl Default for YieldCurveParams {
    fn default() -> Self {
        Self {
            short_term: "2Y".to_string(),
            long_term: "10Y".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaylorRuleParams {
    pub neutral_rate: f64,
    pub target_inflation: f64,
}

impl Default for TaylorRuleParams {
    fn default() -> Self {
        Self {
            neutral_rate: 2.5,
            target_inflation: 2.0,
        }
    }
}

impl TaylorRuleParams {
    pub fn policy_rate(&self, inflation: f64, output_gap: f64) -> f64 {
        taylor_rule(self.neutral_rate, inflation, self.target_inflation, output_gap)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TechnicalConfig {
    pub rsi: RsiParams,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
    pub stochastic: StochasticParams,
    pub trend: TrendParams,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RiskConfig {
    pub var: VarParams,
    pub sharpe: SharpeParams,
    pub volatility: VolatilityParams,
    pub beta: BetaParams,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacroConfig {
    pub yield_curve: YieldCurveParams,
    pub taylor_rule: TaylorRuleParams,
}

/// Parameter defaults for every indicator group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndicatorConfig {
    pub technical: TechnicalConfig,
    pub risk: RiskConfig,
    pub macroeconomic: MacroConfig,
}

/// Text report layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Decimal places for every value.
    pub precision: usize,
    /// Print rows whose value could not be computed as `n/a`.
    pub show_unavailable: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            show_unavailable: true,
        }
    }
}
