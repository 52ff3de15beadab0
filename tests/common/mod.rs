#![allow(dead_code)]

use chrono::NaiveDate;
use oracle_indicators::domain::error::IndicatorError;
pub use oracle_indicators::domain::ohlcv::OhlcvBar;
use oracle_indicators::ports::data_port::DataPort;
use std::collections::HashMap;
use std::io::Write;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, source: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(source.to_string(), bars);
        self
    }

    pub fn with_error(mut self, source: &str, reason: &str) -> Self {
        self.errors.insert(source.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_bars(&self, source: &str) -> Result<Vec<OhlcvBar>, IndicatorError> {
        if let Some(reason) = self.errors.get(source) {
            return Err(IndicatorError::DataRead {
                path: source.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(source).cloned().unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One bar per calendar day from 2024-01-01, high/low one point either side.
pub fn bars_from(closes: &[f64]) -> Vec<OhlcvBar> {
    let start = date(2024, 1, 1);
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcvBar {
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 10_000 + i as i64,
        })
        .collect()
}

/// Upward drift with a sine wobble, so both gains and losses occur.
pub fn wavy(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + i as f64 * 0.5 + (i as f64 * 0.7).sin() * 3.0)
        .collect()
}

pub fn to_csv(bars: &[OhlcvBar]) -> String {
    let mut out = String::from("date,open,high,low,close,volume\n");
    for b in bars {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            b.date, b.open, b.high, b.low, b.close, b.volume
        ));
    }
    out
}

pub fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
