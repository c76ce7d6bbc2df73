//! Configuration management for the contact book demo.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// How the book is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One colored line per record
    #[default]
    Text,
    /// JSON array of records
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be 'text' or 'json', got: {}", other)),
        }
    }
}

/// Configuration for the contact book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Colorize terminal output (default: true)
    pub color: bool,

    /// Output format (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_COLOR`: `true`/`false` (default: true)
    /// - `NO_COLOR`: when set and non-empty, disables color
    /// - `CONTACT_BOOK_OUTPUT`: `text` or `json` (default: text)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or_else(|_| "error".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), log_level),
            });
        }

        let no_color = env::var("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false);
        let color = Self::parse_env_bool("CONTACT_BOOK_COLOR", true)? && !no_color;

        let output_format = match env::var("CONTACT_BOOK_OUTPUT") {
            Ok(val) => val.parse().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACT_BOOK_OUTPUT".to_string(),
                reason,
            })?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config {
            log_level,
            color,
            output_format,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            color: true,
            output_format: OutputFormat::Text,
        }
    }
}
