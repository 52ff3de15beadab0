//! Latest reading of every configured indicator for one price history.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::error::IndicatorError;
use crate::domain::indicator::{
    BollingerBand, RsiZone, bollinger_bands, ema, macd, rsi, rsi_wilder, rsi_zone, sma, stochastic,
};
use crate::domain::ohlcv::{OhlcvBar, closes, highs, lows, simple_returns};
use crate::domain::params::IndicatorConfig;
use crate::domain::risk::{
    DEFAULT_TARGET_RETURN, beta, conditional_var, max_drawdown, sharpe_ratio, sortino_ratio,
    value_at_risk,
};
use crate::domain::sector::sector_correlation;
use crate::domain::volatility::{atr_bars, historical_volatility};

const MIN_BARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdReading {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Values that cannot be computed from the history (window longer than the
/// data, flat prices, no benchmark) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub config: IndicatorConfig,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub bar_count: usize,
    pub last_close: f64,

    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub rsi_wilder: Option<f64>,
    /// Zone of the latest Wilder RSI.
    pub rsi_zone: Option<RsiZone>,
    pub macd: Option<MacdReading>,
    pub bollinger: Option<BollingerBand>,
    pub stochastic_k: Option<f64>,
    pub stochastic_d: Option<f64>,
    pub atr: Option<f64>,

    pub historical_volatility: Option<f64>,
    pub value_at_risk: Option<f64>,
    pub conditional_var: Option<f64>,
    pub max_drawdown: f64,
    pub sharpe_ratio: Option<f64>,
    pub sortino_ratio: Option<f64>,
    pub beta: Option<f64>,
    pub correlation: Option<f64>,
    /// Number of dates shared with the benchmark.
    pub benchmark_overlap: usize,
}

impl IndicatorSnapshot {
    pub fn compute(
        bars: &[OhlcvBar],
        benchmark: Option<&[OhlcvBar]>,
        config: &IndicatorConfig,
    ) -> Result<Self, IndicatorError> {
        let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
            return Err(insufficient(bars.len()));
        };
        if bars.len() < MIN_BARS {
            return Err(insufficient(bars.len()));
        }

        let technical = &config.technical;
        let risk = &config.risk;

        let close = closes(bars);
        let high = highs(bars);
        let low = lows(bars);
        let returns = simple_returns(&close);

        let rsi_latest = latest(&rsi_wilder(&close, technical.rsi.period));
        let macd_out = macd(
            &close,
            technical.macd.fast,
            technical.macd.slow,
            technical.macd.signal,
        );
        let stoch = stochastic(
            &high,
            &low,
            &close,
            technical.stochastic.k_period,
            technical.stochastic.d_period,
        );

        let (beta_value, correlation, benchmark_overlap) = match benchmark {
            Some(benchmark) => relative_to(bars, benchmark),
            None => (None, None, 0),
        };

        Ok(Self {
            config: config.clone(),
            first_date: first.date,
            last_date: last.date,
            bar_count: bars.len(),
            last_close: last.close,

            sma: latest(&sma(&close, technical.trend.sma_period)),
            ema: latest(&ema(&close, technical.trend.ema_period)),
            rsi: finite(rsi(&close, technical.rsi.period)),
            rsi_wilder: rsi_latest,
            rsi_zone: rsi_latest
                .map(|v| rsi_zone(v, technical.rsi.overbought, technical.rsi.oversold)),
            macd: macd_out
                .last()
                .map(|(line, signal, histogram)| MacdReading {
                    line,
                    signal,
                    histogram,
                }),
            bollinger: bollinger_bands(
                &close,
                technical.bollinger.period,
                technical.bollinger.std_dev,
            )
            .last()
            .copied()
            .filter(|b| b.upper.is_finite() && b.lower.is_finite()),
            stochastic_k: latest(&stoch.k),
            stochastic_d: latest(&stoch.d),
            atr: latest(&atr_bars(bars, technical.trend.atr_period)),

            historical_volatility: finite(historical_volatility(
                &returns,
                risk.volatility.annualization,
            )),
            value_at_risk: finite(value_at_risk(&returns, risk.var.confidence_level)),
            conditional_var: finite(conditional_var(&returns, risk.var.confidence_level)),
            max_drawdown: max_drawdown(&close),
            sharpe_ratio: finite(sharpe_ratio(&returns, risk.sharpe.risk_free_rate)),
            sortino_ratio: finite(sortino_ratio(&returns, DEFAULT_TARGET_RETURN)),
            beta: beta_value,
            correlation,
            benchmark_overlap,
        })
    }
}

fn insufficient(have: usize) -> IndicatorError {
    IndicatorError::InsufficientData {
        series: "price bars".to_string(),
        have,
        need: MIN_BARS,
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn latest(series: &[f64]) -> Option<f64> {
    series.last().copied().and_then(finite)
}

/// Beta and correlation of returns over the dates both histories share.
fn relative_to(bars: &[OhlcvBar], benchmark: &[OhlcvBar]) -> (Option<f64>, Option<f64>, usize) {
    let by_date: HashMap<NaiveDate, f64> = benchmark.iter().map(|b| (b.date, b.close)).collect();

    let (asset, market): (Vec<f64>, Vec<f64>) = bars
        .iter()
        .filter_map(|bar| by_date.get(&bar.date).map(|&m| (bar.close, m)))
        .unzip();

    let asset_returns = simple_returns(&asset);
    let market_returns = simple_returns(&market);

    (
        finite(beta(&asset_returns, &market_returns)),
        finite(sector_correlation(&asset_returns, &market_returns)),
        asset.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars_from(closes: &[f64]) -> Vec<OhlcvBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| OhlcvBar {
                date: start + chrono::Duration::days(i as i64),
                open: c,
                high: c + 1.0,
                low: c - 1.0,
                close: c,
                volume: 1_000,
            })
            .collect()
    }

    fn wavy(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + i as f64 * 0.5 + (i as f64 * 0.7).sin() * 3.0)
            .collect()
    }

    #[test]
    fn fewer_than_two_bars_is_insufficient() {
        let config = IndicatorConfig::default();
        for n in [0, 1] {
            let err = IndicatorSnapshot::compute(&bars_from(&wavy(n)), None, &config).unwrap_err();
            assert!(matches!(
                err,
                IndicatorError::InsufficientData { have, need: 2, .. } if have == n
            ));
        }
    }

    #[test]
    fn short_history_leaves_windows_empty() {
        let bars = bars_from(&[100.0, 102.0]);
        let snap = IndicatorSnapshot::compute(&bars, None, &IndicatorConfig::default()).unwrap();

        assert_eq!(snap.bar_count, 2);
        assert_eq!(snap.last_close, 102.0);
        assert_eq!(snap.sma, None);
        assert_eq!(snap.rsi, Some(100.0));
        assert_eq!(snap.rsi_wilder, None);
        assert_eq!(snap.rsi_zone, None);
        assert_eq!(snap.bollinger, None);
        assert_eq!(snap.atr, None);
        // one return has no sample variance
        assert_eq!(snap.historical_volatility, None);
        assert!(snap.value_at_risk.is_some());
        assert_eq!(snap.max_drawdown, 0.0);
        assert_eq!(snap.beta, None);
        assert!((snap.ema.unwrap() - (100.0 + 2.0 * 2.0 / 21.0)).abs() < 1e-12);
    }

    #[test]
    fn long_history_matches_direct_calls() {
        let prices = wavy(80);
        let bars = bars_from(&prices);
        let config = IndicatorConfig::default();
        let snap = IndicatorSnapshot::compute(&bars, None, &config).unwrap();

        assert_eq!(snap.first_date, bars[0].date);
        assert_eq!(snap.last_date, bars[79].date);
        assert_eq!(snap.sma, sma(&prices, 20).last().copied());
        assert_eq!(snap.ema, ema(&prices, 20).last().copied());
        assert_eq!(snap.rsi, Some(rsi(&prices, 14)));
        assert_eq!(snap.rsi_wilder, rsi_wilder(&prices, 14).last().copied());
        assert!(snap.rsi_zone.is_some());

        let band = snap.bollinger.unwrap();
        assert!(band.lower <= band.middle && band.middle <= band.upper);

        let macd_reading = snap.macd.unwrap();
        assert!((macd_reading.histogram - (macd_reading.line - macd_reading.signal)).abs() < 1e-12);

        let k = snap.stochastic_k.unwrap();
        assert!((0.0..=100.0).contains(&k));
        assert!(snap.stochastic_d.is_some());
        assert!(snap.atr.unwrap() > 0.0);

        let returns = simple_returns(&prices);
        assert_eq!(
            snap.historical_volatility,
            Some(historical_volatility(&returns, 252))
        );
        assert!(snap.value_at_risk.unwrap() <= 0.0);
        assert!(snap.conditional_var.unwrap() <= snap.value_at_risk.unwrap());
        assert!(snap.max_drawdown > 0.0);
        assert!(snap.sharpe_ratio.unwrap() > 0.0);
        assert!(snap.sortino_ratio.is_some());
        assert_eq!(snap.beta, None);
        assert_eq!(snap.benchmark_overlap, 0);
    }

    #[test]
    fn flat_history_has_no_rsi_reading() {
        let snap =
            IndicatorSnapshot::compute(&bars_from(&[100.0; 30]), None, &IndicatorConfig::default())
                .unwrap();
        assert_eq!(snap.rsi, None);
        assert_eq!(snap.rsi_wilder, None);
        assert_eq!(snap.rsi_zone, None);
    }

    #[test]
    fn volatility_annualization_leaves_sharpe_alone() {
        let bars = bars_from(&wavy(60));
        let daily = IndicatorSnapshot::compute(&bars, None, &IndicatorConfig::default()).unwrap();

        let mut weekly_config = IndicatorConfig::default();
        weekly_config.risk.volatility.annualization = 52;
        let weekly = IndicatorSnapshot::compute(&bars, None, &weekly_config).unwrap();

        assert!(weekly.historical_volatility.unwrap() < daily.historical_volatility.unwrap());
        assert_eq!(weekly.sharpe_ratio, daily.sharpe_ratio);
    }

    #[test]
    fn config_periods_are_honoured() {
        let prices = wavy(40);
        let mut config = IndicatorConfig::default();
        config.technical.trend.sma_period = 5;
        config.risk.var.confidence_level = 0.10;

        let snap = IndicatorSnapshot::compute(&bars_from(&prices), None, &config).unwrap();
        assert_eq!(snap.sma, sma(&prices, 5).last().copied());
        assert_eq!(
            snap.value_at_risk,
            Some(value_at_risk(&simple_returns(&prices), 0.10))
        );
        assert_eq!(snap.config, config);
    }

    #[test]
    fn benchmark_against_itself() {
        let bars = bars_from(&wavy(30));
        let snap =
            IndicatorSnapshot::compute(&bars, Some(&bars), &IndicatorConfig::default()).unwrap();

        assert_eq!(snap.beta, Some(1.0));
        assert!((snap.correlation.unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(snap.benchmark_overlap, 30);
    }

    #[test]
    fn benchmark_is_aligned_by_date() {
        let prices = wavy(30);
        let bars = bars_from(&prices);
        // benchmark covers only the last 20 dates, at twice the price
        let benchmark: Vec<OhlcvBar> = bars[10..]
            .iter()
            .map(|b| OhlcvBar {
                close: b.close * 2.0,
                ..b.clone()
            })
            .collect();

        let snap =
            IndicatorSnapshot::compute(&bars, Some(&benchmark), &IndicatorConfig::default())
                .unwrap();
        assert_eq!(snap.benchmark_overlap, 20);
        assert!((snap.beta.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_benchmark_gives_none() {
        let bars = bars_from(&wavy(10));
        let mut other = bars_from(&wavy(10));
        for b in &mut other {
            b.date = b.date + chrono::Duration::days(365);
        }

        let snap =
            IndicatorSnapshot::compute(&bars, Some(&other), &IndicatorConfig::default()).unwrap();
        assert_eq!(snap.benchmark_overlap, 0);
        assert_eq!(snap.beta, None);
        assert_eq!(snap.correlation, None);
    }
}
