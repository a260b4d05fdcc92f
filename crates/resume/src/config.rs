use std::{env, str::FromStr};

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid LOG_FORMAT '{0}': expected 'pretty' or 'json'")]
    InvalidLogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the items table (default: "resume")
    pub table_name: String,
    /// Name of the `(userId, field)` secondary index (default: "user_x_field")
    pub field_index: String,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RESUME_DB` - Items table name (default: "resume")
    /// - `RESUME_FIELD_INDEX` - Field index name (default: "user_x_field")
    /// - `LOG_FORMAT` - `pretty` or `json` (default: "pretty")
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: env::var("RESUME_DB").unwrap_or_else(|_| "resume".to_string()),
            field_index: env::var("RESUME_FIELD_INDEX")
                .unwrap_or_else(|_| "user_x_field".to_string()),
            log_format: env::var("LOG_FORMAT")
                .ok()
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "resume".to_string(),
            field_index: "user_x_field".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
