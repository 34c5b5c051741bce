//! Logging configuration and subscriber setup

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line format
    #[default]
    Full,
    /// Compact text format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow!(
                "Invalid log format: {}. Valid formats: full, compact, json",
                value
            )),
        }
    }
}

/// Logging configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
        }
    }
}

impl LoggingConfig {
    /// `RUST_LOG` wins over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .with_context(|| format!("Invalid log level: {}", self.level)),
        }
    }

    /// Install the global subscriber
    pub fn initialize(&self) -> Result<()> {
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stdout);

        let installed = match self.format {
            LogFormat::Full => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = LoggingConfig {
            level: "stop_screenrecord=loud".to_string(),
            format: LogFormat::Full,
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(config.env_filter().is_err());
        }
    }
}
