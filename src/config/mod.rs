use crate::utils::error::{DeferredError, Result};
use crate::utils::validation::{validate_filter_directive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FILTER: &str = "deferred_close=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Output settings for the `tracing` subscriber installed by
/// [`crate::utils::logger::init_from_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Compact,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeferredError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Accepts either a bare table or one nested under `[logging]`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let section = match table.get("logging") {
            Some(nested) => nested.clone(),
            None => toml::Value::Table(table),
        };
        let config: LoggingConfig = section.try_into()?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        validate_filter_directive("filter", &self.filter)
    }
}
