//! CSV price history adapter.
//!
//! Files carry a `date,open,high,low,close,volume` header with dates in
//! `YYYY-MM-DD`. Sources are resolved against the adapter's base path.

use crate::domain::error::IndicatorError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
}

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, source: &str) -> PathBuf {
        self.base_path.join(source)
    }

    /// Parse CSV text into bars sorted by date.
    pub fn parse(content: &str) -> Result<Vec<OhlcvBar>, IndicatorError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for (index, result) in rdr.deserialize::<CsvRow>().enumerate() {
            // header is line 1
            let line = index as u64 + 2;
            let row = result.map_err(|e| IndicatorError::DataParse {
                line: e.position().map(|p| p.line()).unwrap_or(line),
                reason: e.to_string(),
            })?;
            bars.push(row_to_bar(row, line)?);
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }
}

fn row_to_bar(row: CsvRow, line: u64) -> Result<OhlcvBar, IndicatorError> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
        IndicatorError::DataParse {
            line,
            reason: format!("invalid date '{}': {}", row.date, e),
        }
    })?;

    let prices = [row.open, row.high, row.low, row.close];
    if prices.iter().any(|p| !p.is_finite()) {
        return Err(IndicatorError::DataParse {
            line,
            reason: "prices must be finite".to_string(),
        });
    }
    if row.high < row.low {
        return Err(IndicatorError::DataParse {
            line,
            reason: format!("high {} is below low {}", row.high, row.low),
        });
    }

    Ok(OhlcvBar {
        date,
        open: row.open,
        high: row.high,
        low: row.low,
        close: row.close,
        volume: row.volume,
    })
}

impl DataPort for CsvAdapter {
    fn fetch_bars(&self, source: &str) -> Result<Vec<OhlcvBar>, IndicatorError> {
        let path = self.csv_path(source);
        let content = fs::read_to_string(&path).map_err(|e| IndicatorError::DataRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let bars = Self::parse(&content)?;
        debug!(path = %path.display(), bars = bars.len(), "loaded price history");
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "date,open,high,low,close,volume\n\
        2024-01-16,105.0,115.0,100.0,110.0,60000\n\
        2024-01-15,100.0,110.0,90.0,105.0,50000\n\
        2024-01-17,110.0,120.0,105.0,115.0,55000\n";

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        fs::write(path.join("BHP.csv"), SAMPLE).unwrap();
        fs::write(path.join("EMPTY.csv"), "date,open,high,low,close,volume\n").unwrap();
        (dir, path)
    }

    #[test]
    fn fetch_bars_returns_sorted_data() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let bars = adapter.fetch_bars("BHP.csv").unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(bars[0].open, 100.0);
        assert_eq!(bars[0].high, 110.0);
        assert_eq!(bars[0].low, 90.0);
        assert_eq!(bars[0].close, 105.0);
        assert_eq!(bars[0].volume, 50000);
        assert_eq!(bars[2].close, 115.0);
    }

    #[test]
    fn data_range_reports_span() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let (first, last, count) = adapter.data_range("BHP.csv").unwrap().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
        assert_eq!(count, 3);

        assert_eq!(adapter.data_range("EMPTY.csv").unwrap(), None);
    }

    #[test]
    fn missing_file_is_data_read_error() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);
        let err = adapter.fetch_bars("NOPE.csv").unwrap_err();
        assert!(matches!(err, IndicatorError::DataRead { .. }));
    }

    #[test]
    fn bad_date_reports_line() {
        let content = "date,open,high,low,close,volume\n\
            2024-01-15,100,110,90,105,1\n\
            15/01/2024,100,110,90,105,1\n";
        let err = CsvAdapter::parse(content).unwrap_err();
        assert!(matches!(err, IndicatorError::DataParse { line: 3, .. }));
    }

    #[test]
    fn non_numeric_price_is_parse_error() {
        let content = "date,open,high,low,close,volume\n2024-01-15,abc,110,90,105,1\n";
        let err = CsvAdapter::parse(content).unwrap_err();
        assert!(matches!(err, IndicatorError::DataParse { line: 2, .. }));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let content = "date,open,high,low,close,volume\n2024-01-15,100,90,110,105,1\n";
        let err = CsvAdapter::parse(content).unwrap_err();
        assert!(matches!(err, IndicatorError::DataParse { line: 2, .. }));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let content = "date, open, high, low, close, volume\n2024-01-15, 100, 110, 90, 105, 7\n";
        let bars = CsvAdapter::parse(content).unwrap();
        assert_eq!(bars[0].close, 105.0);
        assert_eq!(bars[0].volume, 7);
    }
}
