//! Price history access port trait.

use crate::domain::error::IndicatorError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

pub trait DataPort {
    /// Bars for `source`, sorted by date ascending.
    fn fetch_bars(&self, source: &str) -> Result<Vec<OhlcvBar>, IndicatorError>;

    /// First date, last date and bar count, or `None` for an empty history.
    fn data_range(
        &self,
        source: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, IndicatorError> {
        let bars = self.fetch_bars(source)?;
        Ok(match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date, bars.len())),
            _ => None,
        })
    }
}
