//! Configuration loading and validation.
//!
//! Every key is optional and falls back to the defaults carried by
//! [`IndicatorConfig`] and [`RegimeThresholds`]. The loaded values are
//! validated before any indicator sees them.

use crate::domain::error::IndicatorError;
use crate::domain::params::{IndicatorConfig, ReportOptions};
use crate::domain::regime::RegimeThresholds;
use crate::ports::config_port::ConfigPort;

const TECHNICAL: &str = "technical";
const RISK: &str = "risk";
const MACRO: &str = "macro";
const REGIME: &str = "regime";
const REPORT: &str = "report";
const MAX_PRECISION: i64 = 12;

/// Read `[technical]`, `[risk]` and `[macro]` into a validated config.
pub fn load_indicator_config(
    config: &dyn ConfigPort,
) -> Result<IndicatorConfig, IndicatorError> {
    let mut out = IndicatorConfig::default();

    let technical = &mut out.technical;
    technical.rsi.period = read_period(config, TECHNICAL, "rsi_period", technical.rsi.period)?;
    technical.rsi.overbought =
        config.get_double(TECHNICAL, "rsi_overbought", technical.rsi.overbought);
    technical.rsi.oversold = config.get_double(TECHNICAL, "rsi_oversold", technical.rsi.oversold);
    technical.macd.fast = read_period(config, TECHNICAL, "macd_fast", technical.macd.fast)?;
    technical.macd.slow = read_period(config, TECHNICAL, "macd_slow", technical.macd.slow)?;
    technical.macd.signal = read_period(config, TECHNICAL, "macd_signal", technical.macd.signal)?;
    technical.bollinger.period =
        read_period(config, TECHNICAL, "bollinger_period", technical.bollinger.period)?;
    technical.bollinger.std_dev =
        config.get_double(TECHNICAL, "bollinger_std_dev", technical.bollinger.std_dev);
    technical.stochastic.k_period =
        read_period(config, TECHNICAL, "stochastic_k", technical.stochastic.k_period)?;
    technical.stochastic.d_period =
        read_period(config, TECHNICAL, "stochastic_d", technical.stochastic.d_period)?;
    technical.trend.sma_period =
        read_period(config, TECHNICAL, "sma_period", technical.trend.sma_period)?;
    technical.trend.ema_period =
        read_period(config, TECHNICAL, "ema_period", technical.trend.ema_period)?;
    technical.trend.atr_period =
        read_period(config, TECHNICAL, "atr_period", technical.trend.atr_period)?;

    let risk = &mut out.risk;
    risk.var.confidence_level =
        config.get_double(RISK, "var_confidence", risk.var.confidence_level);
    risk.sharpe.risk_free_rate =
        config.get_double(RISK, "risk_free_rate", risk.sharpe.risk_free_rate);
    risk.volatility.annualization = read_period(
        config,
        RISK,
        "hv_annualization",
        risk.volatility.annualization,
    )?;
    if let Some(benchmark) = config.get_string(RISK, "benchmark") {
        risk.beta.benchmark_index = benchmark.trim().to_string();
    }

    let macroeconomic = &mut out.macroeconomic;
    if let Some(short) = config.get_string(MACRO, "yield_short") {
        macroeconomic.yield_curve.short_term = short.trim().to_string();
    }
    if let Some(long) = config.get_string(MACRO, "yield_long") {
        macroeconomic.yield_curve.long_term = long.trim().to_string();
    }
    macroeconomic.taylor_rule.neutral_rate =
        config.get_double(MACRO, "taylor_neutral_rate", macroeconomic.taylor_rule.neutral_rate);
    macroeconomic.taylor_rule.target_inflation = config.get_double(
        MACRO,
        "taylor_target_inflation",
        macroeconomic.taylor_rule.target_inflation,
    );

    validate_indicator_config(&out)?;
    Ok(out)
}

/// Read `[regime]` into validated thresholds.
pub fn load_regime_thresholds(
    config: &dyn ConfigPort,
) -> Result<RegimeThresholds, IndicatorError> {
    let d = RegimeThresholds::default();
    let t = RegimeThresholds {
        growth_recession: config.get_double(REGIME, "growth_recession", d.growth_recession),
        growth_expansion: config.get_double(REGIME, "growth_expansion", d.growth_expansion),
        growth_boom: config.get_double(REGIME, "growth_boom", d.growth_boom),
        inflation_deflation: config.get_double(
            REGIME,
            "inflation_deflation",
            d.inflation_deflation,
        ),
        inflation_stable: config.get_double(REGIME, "inflation_stable", d.inflation_stable),
        inflation_high: config.get_double(REGIME, "inflation_high", d.inflation_high),
        unemployment_low: config.get_double(REGIME, "unemployment_low", d.unemployment_low),
        unemployment_normal: config.get_double(
            REGIME,
            "unemployment_normal",
            d.unemployment_normal,
        ),
        unemployment_high: config.get_double(REGIME, "unemployment_high", d.unemployment_high),
    };
    validate_regime_thresholds(&t)?;
    Ok(t)
}

/// Read `[report]` layout options.
pub fn load_report_options(config: &dyn ConfigPort) -> Result<ReportOptions, IndicatorError> {
    let d = ReportOptions::default();
    let precision = config.get_int(REPORT, "precision", d.precision as i64);
    if !(0..=MAX_PRECISION).contains(&precision) {
        return Err(IndicatorError::invalid(
            REPORT,
            "precision",
            format!("precision must be between 0 and {MAX_PRECISION}"),
        ));
    }
    Ok(ReportOptions {
        precision: precision as usize,
        show_unavailable: config.get_bool(REPORT, "show_unavailable", d.show_unavailable),
    })
}

pub fn validate_indicator_config(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    validate_rsi(config)?;
    validate_macd(config)?;
    validate_bollinger(config)?;
    validate_stochastic(config)?;
    validate_trend(config)?;
    validate_risk(config)?;
    validate_macro(config)?;
    Ok(())
}

pub fn validate_regime_thresholds(t: &RegimeThresholds) -> Result<(), IndicatorError> {
    ordered(
        "growth_expansion",
        &[t.growth_recession, t.growth_expansion, t.growth_boom],
        "growth thresholds must satisfy recession < expansion < boom",
    )?;
    ordered(
        "inflation_stable",
        &[t.inflation_deflation, t.inflation_stable, t.inflation_high],
        "inflation thresholds must satisfy deflation < stable < high",
    )?;
    ordered(
        "unemployment_normal",
        &[t.unemployment_low, t.unemployment_normal, t.unemployment_high],
        "unemployment thresholds must satisfy low < normal < high",
    )?;
    Ok(())
}

fn read_period(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    default: usize,
) -> Result<usize, IndicatorError> {
    let value = config.get_int(section, key, default as i64);
    match usize::try_from(value) {
        Ok(period) if period > 0 => Ok(period),
        _ => Err(IndicatorError::invalid(
            section,
            key,
            format!("{key} must be a positive integer, got {value}"),
        )),
    }
}

fn positive(section: &str, key: &str, value: usize) -> Result<(), IndicatorError> {
    if value == 0 {
        return Err(IndicatorError::invalid(section, key, format!("{key} must be positive")));
    }
    Ok(())
}

fn ordered(key: &str, values: &[f64], reason: &str) -> Result<(), IndicatorError> {
    let finite = values.iter().all(|v| v.is_finite());
    if !finite || values.windows(2).any(|w| w[0] >= w[1]) {
        return Err(IndicatorError::invalid(REGIME, key, reason));
    }
    Ok(())
}

fn validate_rsi(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let rsi = &config.technical.rsi;
    positive(TECHNICAL, "rsi_period", rsi.period)?;
    for (key, level) in [("rsi_overbought", rsi.overbought), ("rsi_oversold", rsi.oversold)] {
        if !(0.0..=100.0).contains(&level) {
            return Err(IndicatorError::invalid(
                TECHNICAL,
                key,
                format!("{key} must be between 0 and 100"),
            ));
        }
    }
    if rsi.overbought <= rsi.oversold {
        return Err(IndicatorError::invalid(
            TECHNICAL,
            "rsi_overbought",
            "rsi_overbought must be greater than rsi_oversold",
        ));
    }
    Ok(())
}

fn validate_macd(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let macd = &config.technical.macd;
    positive(TECHNICAL, "macd_fast", macd.fast)?;
    positive(TECHNICAL, "macd_slow", macd.slow)?;
    positive(TECHNICAL, "macd_signal", macd.signal)?;
    if macd.fast >= macd.slow {
        return Err(IndicatorError::invalid(
            TECHNICAL,
            "macd_fast",
            "macd_fast must be less than macd_slow",
        ));
    }
    Ok(())
}

fn validate_bollinger(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let bollinger = &config.technical.bollinger;
    positive(TECHNICAL, "bollinger_period", bollinger.period)?;
    if !(bollinger.std_dev > 0.0 && bollinger.std_dev.is_finite()) {
        return Err(IndicatorError::invalid(
            TECHNICAL,
            "bollinger_std_dev",
            "bollinger_std_dev must be positive",
        ));
    }
    Ok(())
}

fn validate_stochastic(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let stochastic = &config.technical.stochastic;
    positive(TECHNICAL, "stochastic_k", stochastic.k_period)?;
    positive(TECHNICAL, "stochastic_d", stochastic.d_period)?;
    Ok(())
}

fn validate_trend(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let trend = &config.technical.trend;
    positive(TECHNICAL, "sma_period", trend.sma_period)?;
    positive(TECHNICAL, "ema_period", trend.ema_period)?;
    positive(TECHNICAL, "atr_period", trend.atr_period)?;
    Ok(())
}

fn validate_risk(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let risk = &config.risk;
    let cl = risk.var.confidence_level;
    if !(cl > 0.0 && cl < 1.0) {
        return Err(IndicatorError::invalid(
            RISK,
            "var_confidence",
            "var_confidence must be between 0 and 1 exclusive",
        ));
    }
    let rf = risk.sharpe.risk_free_rate;
    if !(0.0..1.0).contains(&rf) {
        return Err(IndicatorError::invalid(
            RISK,
            "risk_free_rate",
            "risk_free_rate must be between 0 and 1",
        ));
    }
    positive(RISK, "hv_annualization", risk.volatility.annualization)?;
    if risk.beta.benchmark_index.is_empty() {
        return Err(IndicatorError::ConfigMissing {
            section: RISK.to_string(),
            key: "benchmark".to_string(),
        });
    }
    Ok(())
}

fn validate_macro(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    let macroeconomic = &config.macroeconomic;
    for (key, tenor) in [
        ("yield_short", &macroeconomic.yield_curve.short_term),
        ("yield_long", &macroeconomic.yield_curve.long_term),
    ] {
        if tenor.is_empty() {
            return Err(IndicatorError::ConfigMissing {
                section: MACRO.to_string(),
                key: key.to_string(),
            });
        }
    }
    for (key, value) in [
        ("taylor_neutral_rate", macroeconomic.taylor_rule.neutral_rate),
        ("taylor_target_inflation", macroeconomic.taylor_rule.target_inflation),
    ] {
        if !value.is_finite() {
            return Err(IndicatorError::invalid(MACRO, key, format!("{key} must be finite")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    fn invalid_key(err: IndicatorError) -> String {
        match err {
            IndicatorError::ConfigInvalid { key, .. } => key,
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_yields_defaults() {
        let config = make_config("");
        assert_eq!(load_indicator_config(&config).unwrap(), IndicatorConfig::default());
        assert_eq!(load_regime_thresholds(&config).unwrap(), RegimeThresholds::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = make_config(
            r#"
[technical]
rsi_period = 10
macd_fast = 5
macd_slow = 35
bollinger_std_dev = 2.5
sma_period = 50

[risk]
var_confidence = 0.01
benchmark = QQQ
hv_annualization = 365

[macro]
yield_short = 3M
taylor_neutral_rate = 2.0
"#,
        );
        let loaded = load_indicator_config(&config).unwrap();
        assert_eq!(loaded.technical.rsi.period, 10);
        assert_eq!(loaded.technical.macd.fast, 5);
        assert_eq!(loaded.technical.macd.slow, 35);
        assert_eq!(loaded.technical.macd.signal, 9);
        assert_eq!(loaded.technical.bollinger.std_dev, 2.5);
        assert_eq!(loaded.technical.trend.sma_period, 50);
        assert_eq!(loaded.risk.var.confidence_level, 0.01);
        assert_eq!(loaded.risk.beta.benchmark_index, "QQQ");
        assert_eq!(loaded.risk.volatility.annualization, 365);
        assert_eq!(loaded.macroeconomic.yield_curve.short_term, "3M");
        assert_eq!(loaded.macroeconomic.yield_curve.long_term, "10Y");
        assert_eq!(loaded.macroeconomic.taylor_rule.neutral_rate, 2.0);
    }

    #[test]
    fn zero_period_fails() {
        let err = load_indicator_config(&make_config("[technical]\nrsi_period = 0\n")).unwrap_err();
        assert_eq!(invalid_key(err), "rsi_period");
    }

    #[test]
    fn negative_period_fails() {
        let config = make_config("[technical]\natr_period = -3\n");
        let err = load_indicator_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "atr_period");
    }

    #[test]
    fn macd_fast_must_be_below_slow() {
        let config = make_config("[technical]\nmacd_fast = 26\nmacd_slow = 12\n");
        let err = load_indicator_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "macd_fast");
    }

    #[test]
    fn bollinger_std_dev_must_be_positive() {
        let err = load_indicator_config(&make_config("[technical]\nbollinger_std_dev = 0\n"))
            .unwrap_err();
        assert_eq!(invalid_key(err), "bollinger_std_dev");
    }

    #[test]
    fn rsi_levels_must_be_ordered() {
        let err = load_indicator_config(&make_config(
            "[technical]\nrsi_overbought = 30\nrsi_oversold = 70\n",
        ))
        .unwrap_err();
        assert_eq!(invalid_key(err), "rsi_overbought");
    }

    #[test]
    fn rsi_levels_must_be_in_range() {
        let err =
            load_indicator_config(&make_config("[technical]\nrsi_overbought = 120\n")).unwrap_err();
        assert_eq!(invalid_key(err), "rsi_overbought");
    }

    #[test]
    fn var_confidence_bounds() {
        for value in ["0", "1", "1.5", "-0.1"] {
            let content = format!("[risk]\nvar_confidence = {value}\n");
            let err = load_indicator_config(&make_config(&content)).unwrap_err();
            assert_eq!(invalid_key(err), "var_confidence");
        }
    }

    #[test]
    fn risk_free_rate_out_of_range_fails() {
        let config = make_config("[risk]\nrisk_free_rate = 1.5\n");
        let err = load_indicator_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "risk_free_rate");
    }

    #[test]
    fn blank_benchmark_is_missing() {
        let mut config = IndicatorConfig::default();
        config.risk.beta.benchmark_index.clear();
        let err = validate_indicator_config(&config).unwrap_err();
        assert!(matches!(err, IndicatorError::ConfigMissing { key, .. } if key == "benchmark"));
    }

    #[test]
    fn validate_rejects_hand_built_config() {
        let mut config = IndicatorConfig::default();
        config.technical.stochastic.d_period = 0;
        let err = validate_indicator_config(&config).unwrap_err();
        assert_eq!(invalid_key(err), "stochastic_d");
    }

    #[test]
    fn report_options_load() {
        let options = load_report_options(&make_config(
            "[report]\nprecision = 2\nshow_unavailable = no\n",
        ))
        .unwrap();
        assert_eq!(options.precision, 2);
        assert!(!options.show_unavailable);
        assert_eq!(load_report_options(&make_config("")).unwrap(), ReportOptions::default());
    }

    #[test]
    fn report_precision_bounds() {
        let err = load_report_options(&make_config("[report]\nprecision = 20\n")).unwrap_err();
        assert_eq!(invalid_key(err), "precision");
    }

    #[test]
    fn regime_overrides_are_applied() {
        let t = load_regime_thresholds(&make_config(
            "[regime]\ngrowth_boom = 5.0\nunemployment_high = 9.0\n",
        ))
        .unwrap();
        assert_eq!(t.growth_boom, 5.0);
        assert_eq!(t.unemployment_high, 9.0);
        assert_eq!(t.growth_recession, -0.5);
    }

    #[test]
    fn regime_thresholds_must_be_ordered() {
        let config = make_config("[regime]\ngrowth_boom = 1.0\n");
        let err = load_regime_thresholds(&config).unwrap_err();
        assert_eq!(invalid_key(err), "growth_expansion");

        let err =
            load_regime_thresholds(&make_config("[regime]\ninflation_high = 2.0\n")).unwrap_err();
        assert_eq!(invalid_key(err), "inflation_stable");

        let err =
            load_regime_thresholds(&make_config("[regime]\nunemployment_low = 7.0\n")).unwrap_err();
        assert_eq!(invalid_key(err), "unemployment_normal");
    }
}
