//! Domain error types.
//!
//! Indicator math never fails: degenerate input yields `NaN` or an empty
//! series. These errors cover the boundary where configuration, price files
//! and reports enter or leave the crate.

/// Top-level error type for oracle-indicators.
#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to read {path}: {reason}")]
    DataRead { path: String, reason: String },

    #[error("price data error at line {line}: {reason}")]
    DataParse { line: u64, reason: String },

    #[error("insufficient data for {series}: have {have} points, need {need}")]
    InsufficientData {
        series: String,
        have: usize,
        need: usize,
    },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IndicatorError {
    pub(crate) fn invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        IndicatorError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&IndicatorError> for std::process::ExitCode {
    fn from(err: &IndicatorError) -> Self {
        let code: u8 = match err {
            IndicatorError::Io(_) | IndicatorError::Report { .. } => 1,
            IndicatorError::ConfigParse { .. }
            | IndicatorError::ConfigMissing { .. }
            | IndicatorError::ConfigInvalid { .. } => 2,
            IndicatorError::DataRead { .. } | IndicatorError::DataParse { .. } => 3,
            IndicatorError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
