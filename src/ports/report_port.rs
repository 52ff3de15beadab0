//! Report generation port trait.

use crate::domain::error::IndicatorError;
use crate::domain::snapshot::IndicatorSnapshot;

/// Port for writing indicator reports.
pub trait ReportPort {
    fn write(&self, snapshot: &IndicatorSnapshot, output_path: &str) -> Result<(), IndicatorError>;
}
