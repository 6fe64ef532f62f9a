//! # Tax Configuration
//!
//! Loads the numbers behind [`TaxPolicy`] from a file and the environment.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SALESTAX_BASIC_RATE_BPS=1000                                       │
//! │     SALESTAX_IMPORT_DUTY_BPS=500                                       │
//! │     SALESTAX_ROUNDING_INCREMENT_CENTS=5                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/salestax/tax.toml (Linux)                                │
//! │     ~/Library/Application Support/com.salestax.salestax/tax.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10% basic, 5% import duty, round up to 5 cents                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tax.toml
//! [tax]
//! basic_rate_bps = 1000
//! import_duty_bps = 500
//! rounding_increment_cents = 5
//! ```
//!
//! Category keywords are not configurable; only the rates and rounding are.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use salestax_core::money::NICKEL;
use salestax_core::tax::{BASIC_RATE, IMPORT_DUTY};
use salestax_core::{Money, TaxPolicy, TaxRate};

use crate::error::{ConfigError, ConfigResult};

pub const ENV_BASIC_RATE_BPS: &str = "SALESTAX_BASIC_RATE_BPS";
pub const ENV_IMPORT_DUTY_BPS: &str = "SALESTAX_IMPORT_DUTY_BPS";
pub const ENV_ROUNDING_INCREMENT_CENTS: &str = "SALESTAX_ROUNDING_INCREMENT_CENTS";

// =============================================================================
// Tax Settings
// =============================================================================

/// The `[tax]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSettings {
    /// Basic sales tax on non-exempt goods, in basis points.
    #[serde(default = "default_basic_rate_bps")]
    pub basic_rate_bps: u32,

    /// Import duty on every imported good, in basis points.
    #[serde(default = "default_import_duty_bps")]
    pub import_duty_bps: u32,

    /// Tax is rounded up to a multiple of this many cents.
    #[serde(default = "default_rounding_increment_cents")]
    pub rounding_increment_cents: i64,
}

fn default_basic_rate_bps() -> u32 {
    BASIC_RATE.bps()
}

fn default_import_duty_bps() -> u32 {
    IMPORT_DUTY.bps()
}

fn default_rounding_increment_cents() -> i64 {
    NICKEL.cents()
}

impl Default for TaxSettings {
    fn default() -> Self {
        TaxSettings {
            basic_rate_bps: default_basic_rate_bps(),
            import_duty_bps: default_import_duty_bps(),
            rounding_increment_cents: default_rounding_increment_cents(),
        }
    }
}

// =============================================================================
// Main Tax Configuration
// =============================================================================

/// Complete tax configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    #[serde(default)]
    pub tax: TaxSettings,
}

impl TaxConfig {
    /// Creates a config holding the standard values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (tax.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading tax config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load tax config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Tax config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tax.rounding_increment_cents <= 0 {
            return Err(ConfigError::InvalidConfig(format!(
                "rounding_increment_cents must be greater than 0, got {}",
                self.tax.rounding_increment_cents
            )));
        }

        self.policy().map(|_| ())
    }

    /// Builds the policy the calculation runs on.
    pub fn policy(&self) -> ConfigResult<TaxPolicy> {
        let policy = TaxPolicy::new(
            TaxRate::from_bps(self.tax.basic_rate_bps),
            TaxRate::from_bps(self.tax.import_duty_bps),
            Money::from_cents(self.tax.rounding_increment_cents),
        )?;
        Ok(policy)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BASIC_RATE_BPS) {
            match value.trim().parse::<u32>() {
                Ok(bps) => {
                    debug!(bps = bps, "Overriding basic rate from environment");
                    self.tax.basic_rate_bps = bps;
                }
                Err(_) => warn!(value = %value, "Ignoring unparsable {}", ENV_BASIC_RATE_BPS),
            }
        }

        if let Some(value) = lookup(ENV_IMPORT_DUTY_BPS) {
            match value.trim().parse::<u32>() {
                Ok(bps) => {
                    debug!(bps = bps, "Overriding import duty from environment");
                    self.tax.import_duty_bps = bps;
                }
                Err(_) => warn!(value = %value, "Ignoring unparsable {}", ENV_IMPORT_DUTY_BPS),
            }
        }

        if let Some(value) = lookup(ENV_ROUNDING_INCREMENT_CENTS) {
            match value.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(cents = cents, "Overriding rounding increment from environment");
                    self.tax.rounding_increment_cents = cents;
                }
                Err(_) => warn!(
                    value = %value,
                    "Ignoring unparsable {}", ENV_ROUNDING_INCREMENT_CENTS
                ),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "salestax", "salestax")
            .map(|dirs| dirs.config_dir().join("tax.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_standard_policy() {
        let config = TaxConfig::default();
        assert_eq!(config.tax.basic_rate_bps, 1000);
        assert_eq!(config.tax.import_duty_bps, 500);
        assert_eq!(config.tax.rounding_increment_cents, 5);
        assert_eq!(config.policy().unwrap(), TaxPolicy::standard());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TaxConfig = toml::from_str("[tax]\nbasic_rate_bps = 800\n").unwrap();
        assert_eq!(config.tax.basic_rate_bps, 800);
        assert_eq!(config.tax.import_duty_bps, 500);
        assert_eq!(config.tax.rounding_increment_cents, 5);

        let empty: TaxConfig = toml::from_str("").unwrap();
        assert_eq!(empty, TaxConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = TaxConfig::default();
        assert!(config.validate().is_ok());

        config.tax.rounding_increment_cents = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidConfig(_))));

        config.tax.rounding_increment_cents = 5;
        config.tax.basic_rate_bps = 20000;
        assert!(matches!(config.validate(), Err(ConfigError::Policy(_))));
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config = TaxConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_BASIC_RATE_BPS, "825"),
            (ENV_IMPORT_DUTY_BPS, " 0 "),
            (ENV_ROUNDING_INCREMENT_CENTS, "1"),
        ]));

        assert_eq!(config.tax.basic_rate_bps, 825);
        assert_eq!(config.tax.import_duty_bps, 0);
        assert_eq!(config.tax.rounding_increment_cents, 1);
    }

    #[test]
    fn test_unparsable_overrides_are_ignored() {
        let mut config = TaxConfig::default();
        config.apply_overrides(lookup_from(&[
            (ENV_BASIC_RATE_BPS, "ten percent"),
            (ENV_ROUNDING_INCREMENT_CENTS, "-"),
        ]));
        assert_eq!(config, TaxConfig::default());
    }

    #[test]
    fn test_toml_serialization() {
        let config = TaxConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[tax]"));
        assert!(toml_str.contains("basic_rate_bps = 1000"));
    }
}
