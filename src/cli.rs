//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    load_indicator_config, load_regime_thresholds, load_report_options,
};
use crate::domain::error::IndicatorError;
use crate::domain::params::{IndicatorConfig, ReportOptions};
use crate::domain::regime::{DataQuality, RegimeAssessment, RegimeThresholds, assess};
use crate::domain::snapshot::IndicatorSnapshot;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "oracle-indicators",
    about = "Technical, risk and macro indicators for price histories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the latest indicator snapshot for a CSV price history
    Analyze {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Benchmark price history used for beta and correlation
        #[arg(short, long)]
        benchmark: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Classify an economic regime from growth, inflation and unemployment
    Regime {
        #[arg(long, allow_negative_numbers = true)]
        growth: f64,
        #[arg(long, allow_negative_numbers = true)]
        inflation: f64,
        #[arg(long)]
        unemployment: f64,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate an indicator configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the effective configuration
    ShowConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Everything a configuration file can set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub indicators: IndicatorConfig,
    pub regime: RegimeThresholds,
    pub report: ReportOptions,
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze {
            input,
            config,
            benchmark,
            output,
        } => run_analyze(&input, config.as_deref(), benchmark.as_deref(), output.as_deref()),
        Command::Regime {
            growth,
            inflation,
            unemployment,
            config,
        } => run_regime(growth, inflation, unemployment, config.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::ShowConfig { config } => run_show_config(config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Load and validate every section, or the defaults when no file is given.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, IndicatorError> {
    let Some(path) = config_path else {
        return Ok(Settings::default());
    };

    info!(path = %path.display(), "loading config");
    let adapter = FileConfigAdapter::from_file(path)?;
    Ok(Settings {
        indicators: load_indicator_config(&adapter)?,
        regime: load_regime_thresholds(&adapter)?,
        report: load_report_options(&adapter)?,
    })
}

/// Fetch the price history (and benchmark) and compute the snapshot.
pub fn build_snapshot(
    data: &dyn DataPort,
    input: &str,
    benchmark: Option<&str>,
    config: &IndicatorConfig,
) -> Result<IndicatorSnapshot, IndicatorError> {
    let bars = data.fetch_bars(input)?;
    info!(source = input, bars = bars.len(), "price history loaded");

    let benchmark_bars = match benchmark {
        Some(source) => {
            let bars = data.fetch_bars(source)?;
            info!(source, bars = bars.len(), "benchmark loaded");
            Some(bars)
        }
        None => None,
    };

    let snapshot = IndicatorSnapshot::compute(&bars, benchmark_bars.as_deref(), config)?;
    if benchmark.is_some() && snapshot.benchmark_overlap < 3 {
        warn!(
            overlap = snapshot.benchmark_overlap,
            "benchmark shares too few dates for beta"
        );
    }
    Ok(snapshot)
}

fn run_analyze(
    input: &Path,
    config_path: Option<&Path>,
    benchmark: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), IndicatorError> {
    let settings = load_settings(config_path)?;
    let data = CsvAdapter::new(PathBuf::from("."));

    let input = input.to_string_lossy();
    let benchmark = benchmark.map(|p| p.to_string_lossy());
    let snapshot = build_snapshot(&data, &input, benchmark.as_deref(), &settings.indicators)?;

    let report = TextReportAdapter::new(settings.report);
    match output {
        Some(path) => report.write(&snapshot, &path.to_string_lossy())?,
        None => write_output(&mut io::stdout().lock(), &report.render(&snapshot))?,
    }
    Ok(())
}

fn run_regime(
    growth: f64,
    inflation: f64,
    unemployment: f64,
    config_path: Option<&Path>,
) -> Result<(), IndicatorError> {
    let settings = load_settings(config_path)?;
    let assessment = assess(
        growth,
        inflation,
        unemployment,
        DataQuality::High,
        &settings.regime,
    );
    info!(regime = %assessment.regime, confidence = assessment.confidence, "classified");
    write_output(&mut io::stdout().lock(), &render_assessment(&assessment))
}

fn run_validate(config_path: &Path) -> Result<(), IndicatorError> {
    load_settings(Some(config_path))?;
    println!("Configuration {} is valid.", config_path.display());
    Ok(())
}

fn run_show_config(config_path: Option<&Path>) -> Result<(), IndicatorError> {
    let settings = load_settings(config_path)?;
    write_output(&mut io::stdout().lock(), &render_settings(&settings))
}

/// Write rendered text and flush; a closed pipe surfaces as `Io`.
pub fn write_output(out: &mut dyn Write, text: &str) -> Result<(), IndicatorError> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn render_assessment(a: &RegimeAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Regime        {}", a.regime);
    let _ = writeln!(out, "Confidence    {:.2}", a.confidence);
    let _ = writeln!(out, "Growth        {:.2}%", a.growth);
    let _ = writeln!(out, "Inflation     {:.2}%", a.inflation);
    let _ = writeln!(out, "Unemployment  {:.2}%", a.unemployment);
    let _ = writeln!(out, "Data quality  {}", a.data_quality);
    out
}

/// The effective settings in the INI layout they are read from.
pub fn render_settings(settings: &Settings) -> String {
    let technical = &settings.indicators.technical;
    let risk = &settings.indicators.risk;
    let macroeconomic = &settings.indicators.macroeconomic;
    let regime = &settings.regime;
    let report = &settings.report;

    let mut out = String::new();
    let sections: [(&str, Vec<(&str, String)>); 5] = [
        (
            "technical",
            vec![
                ("rsi_period", technical.rsi.period.to_string()),
                ("rsi_overbought", technical.rsi.overbought.to_string()),
                ("rsi_oversold", technical.rsi.oversold.to_string()),
                ("macd_fast", technical.macd.fast.to_string()),
                ("macd_slow", technical.macd.slow.to_string()),
                ("macd_signal", technical.macd.signal.to_string()),
                ("bollinger_period", technical.bollinger.period.to_string()),
                ("bollinger_std_dev", technical.bollinger.std_dev.to_string()),
                ("stochastic_k", technical.stochastic.k_period.to_string()),
                ("stochastic_d", technical.stochastic.d_period.to_string()),
                ("sma_period", technical.trend.sma_period.to_string()),
                ("ema_period", technical.trend.ema_period.to_string()),
                ("atr_period", technical.trend.atr_period.to_string()),
            ],
        ),
        (
            "risk",
            vec![
                ("var_confidence", risk.var.confidence_level.to_string()),
                ("risk_free_rate", risk.sharpe.risk_free_rate.to_string()),
                ("benchmark", risk.beta.benchmark_index.clone()),
                ("hv_annualization", risk.volatility.annualization.to_string()),
            ],
        ),
        (
            "macro",
            vec![
                ("yield_short", macroeconomic.yield_curve.short_term.clone()),
                ("yield_long", macroeconomic.yield_curve.long_term.clone()),
                (
                    "taylor_neutral_rate",
                    macroeconomic.taylor_rule.neutral_rate.to_string(),
                ),
                (
                    "taylor_target_inflation",
                    macroeconomic.taylor_rule.target_inflation.to_string(),
                ),
            ],
        ),
        (
            "regime",
            vec![
                ("growth_recession", regime.growth_recession.to_string()),
                ("growth_expansion", regime.growth_expansion.to_string()),
                ("growth_boom", regime.growth_boom.to_string()),
                ("inflation_deflation", regime.inflation_deflation.to_string()),
                ("inflation_stable", regime.inflation_stable.to_string()),
                ("inflation_high", regime.inflation_high.to_string()),
                ("unemployment_low", regime.unemployment_low.to_string()),
                ("unemployment_normal", regime.unemployment_normal.to_string()),
                ("unemployment_high", regime.unemployment_high.to_string()),
            ],
        ),
        (
            "report",
            vec![
                ("precision", report.precision.to_string()),
                ("show_unavailable", report.show_unavailable.to_string()),
            ],
        ),
    ];

    for (i, (section, entries)) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[{section}]");
        for (key, value) in entries {
            let _ = writeln!(out, "{key} = {value}");
        }
    }
    out
}
