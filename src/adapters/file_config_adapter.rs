//! INI file configuration adapter.

use crate::domain::error::IndicatorError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IndicatorError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config.load(path).map_err(|reason| IndicatorError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        debug!(path = %path.display(), sections = config.sections().len(), "loaded config");
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, IndicatorError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| IndicatorError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_deref()
            .and_then(Self::parse_bool)
            .unwrap_or(default)
    }
}
