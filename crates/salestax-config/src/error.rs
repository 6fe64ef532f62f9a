//! # Config Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigLoadFailed   - file unreadable or not valid TOML                 │
//! │  ConfigSaveFailed   - no path, directory or write failure               │
//! │  InvalidConfig      - a value that can never be right                   │
//! │  Policy             - numbers rejected by salestax-core's TaxPolicy     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use salestax_core::CoreError;
use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid tax configuration.
    #[error("Invalid tax configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// The configured numbers do not form a valid tax policy.
    #[error(transparent)]
    Policy(#[from] CoreError),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::ConfigSaveFailed(err.to_string())
    }
}
