//! Plain-text report adapter implementing ReportPort.
//!
//! Renders the snapshot as a two-column table grouped into technical and
//! risk blocks.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::domain::error::IndicatorError;
use crate::domain::indicator::IndicatorType;
use crate::domain::params::ReportOptions;
use crate::domain::snapshot::IndicatorSnapshot;
use crate::ports::report_port::ReportPort;
use tracing::info;

const UNAVAILABLE: &str = "n/a";

pub struct TextReportAdapter {
    options: ReportOptions,
}

impl TextReportAdapter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, snapshot: &IndicatorSnapshot) -> String {
        let technical = &snapshot.config.technical;
        let risk = &snapshot.config.risk;
        let benchmark = &risk.beta.benchmark_index;

        let macd_label = IndicatorType::Macd {
            fast: technical.macd.fast,
            slow: technical.macd.slow,
            signal: technical.macd.signal,
        }
        .to_string();
        let bollinger_label = IndicatorType::Bollinger {
            period: technical.bollinger.period,
            std_dev: technical.bollinger.std_dev,
        }
        .to_string();
        let stochastic_label = IndicatorType::Stochastic {
            k_period: technical.stochastic.k_period,
            d_period: technical.stochastic.d_period,
        }
        .to_string();

        let technical_rows: Vec<(String, Option<String>)> = vec![
            self.row(IndicatorType::Sma(technical.trend.sma_period), snapshot.sma),
            self.row(IndicatorType::Ema(technical.trend.ema_period), snapshot.ema),
            self.row(IndicatorType::Rsi(technical.rsi.period), snapshot.rsi),
            self.row(IndicatorType::RsiWilder(technical.rsi.period), snapshot.rsi_wilder),
            (
                "RSI zone".to_string(),
                snapshot.rsi_zone.map(|z| z.to_string()),
            ),
            self.row(format!("{macd_label} line"), snapshot.macd.map(|m| m.line)),
            self.row(format!("{macd_label} signal"), snapshot.macd.map(|m| m.signal)),
            self.row(
                format!("{macd_label} histogram"),
                snapshot.macd.map(|m| m.histogram),
            ),
            self.row(format!("{bollinger_label} upper"), snapshot.bollinger.map(|b| b.upper)),
            self.row(
                format!("{bollinger_label} middle"),
                snapshot.bollinger.map(|b| b.middle),
            ),
            self.row(format!("{bollinger_label} lower"), snapshot.bollinger.map(|b| b.lower)),
            self.row(format!("{stochastic_label} %K"), snapshot.stochastic_k),
            self.row(format!("{stochastic_label} %D"), snapshot.stochastic_d),
            self.row(IndicatorType::Atr(technical.trend.atr_period), snapshot.atr),
        ];

        let confidence_pct = risk.var.confidence_level * 100.0;
        let risk_rows: Vec<(String, Option<String>)> = vec![
            self.row(
                IndicatorType::HistoricalVolatility(risk.volatility.annualization),
                snapshot.historical_volatility,
            ),
            self.row(format!("VaR {confidence_pct}%"), snapshot.value_at_risk),
            self.row(format!("CVaR {confidence_pct}%"), snapshot.conditional_var),
            self.row("Max drawdown %", Some(snapshot.max_drawdown)),
            self.row("Sharpe", snapshot.sharpe_ratio),
            self.row("Sortino", snapshot.sortino_ratio),
            self.row(format!("Beta vs {benchmark}"), snapshot.beta),
            self.row(format!("Correlation vs {benchmark}"), snapshot.correlation),
        ];

        let header: Vec<(String, Option<String>)> = vec![
            (
                "Period".to_string(),
                Some(format!(
                    "{} .. {} ({} bars)",
                    snapshot.first_date, snapshot.last_date, snapshot.bar_count
                )),
            ),
            self.row("Last close", Some(snapshot.last_close)),
        ];

        let width = header
            .iter()
            .chain(&technical_rows)
            .chain(&risk_rows)
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0)
            + 2;

        let mut out = String::from("Indicator snapshot\n");
        self.write_block(&mut out, &header, width);
        out.push_str("\n[technical]\n");
        self.write_block(&mut out, &technical_rows, width);
        out.push_str("\n[risk]\n");
        self.write_block(&mut out, &risk_rows, width);
        out
    }

    fn row(&self, label: impl ToString, value: Option<f64>) -> (String, Option<String>) {
        let precision = self.options.precision;
        (label.to_string(), value.map(|v| format!("{v:.precision$}")))
    }

    fn write_block(&self, out: &mut String, rows: &[(String, Option<String>)], width: usize) {
        for (label, value) in rows {
            let value = match value {
                Some(v) => v.as_str(),
                None if self.options.show_unavailable => UNAVAILABLE,
                None => continue,
            };
            // writing into a String cannot fail
            let _ = writeln!(out, "{label:<width$}{value}");
        }
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

impl ReportPort for TextReportAdapter {
    fn write(&self, snapshot: &IndicatorSnapshot, output_path: &str) -> Result<(), IndicatorError> {
        let text = self.render(snapshot);

        let path = Path::new(output_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| IndicatorError::Report {
                reason: format!("cannot create {}: {}", parent.display(), e),
            })?;
        }
        fs::write(path, text).map_err(|e| IndicatorError::Report {
            reason: format!("cannot write {}: {}", path.display(), e),
        })?;

        info!(path = %path.display(), "report written");
        Ok(())
    }
}
