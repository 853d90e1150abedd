//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("log.level is not a valid filter: {0}")]
    InvalidLogLevel(String),
}

/// Tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// How decoded lines are printed.
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per decoded line.
    #[default]
    Text,
    /// One JSON object per decoded line.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print rejected lines along with their error.
    #[serde(default = "default_true")]
    pub show_errors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_errors: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log.level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log.level.clone()))?;
        Ok(())
    }
}
