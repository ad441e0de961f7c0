//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `RUST_LOG`, when set, takes precedence over the log level here.

use std::env;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Output style of the stderr log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::InvalidValue("STOREFRONT_LOG_FORMAT".to_string())),
        }
    }
}

/// generate-sku configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Log line style.
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let log_level = lookup("STOREFRONT_LOG_LEVEL").unwrap_or(defaults.log_level);
        EnvFilter::try_new(&log_level)
            .map_err(|_| ConfigError::InvalidValue("STOREFRONT_LOG_LEVEL".to_string()))?;

        let log_format = match lookup("STOREFRONT_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(CliConfig {
            log_level,
            log_format,
        })
    }

    /// Builds the tracing filter: `RUST_LOG` first, then the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
