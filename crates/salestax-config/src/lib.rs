//! # salestax-config: Tax Policy Configuration
//!
//! Reads the rates and rounding increment used by `salestax-core` from a TOML
//! file and environment variables. All file system and environment access
//! for the workspace lives here, keeping the core crate pure.
//!
//! ## Example
//! ```rust,no_run
//! use salestax_config::TaxConfig;
//! use salestax_core::{Money, SaleLine, KeywordClassifier};
//!
//! let policy = TaxConfig::load(None)?.policy()?;
//! let line = SaleLine::with_policy(
//!     1,
//!     "music CD",
//!     Money::from_cents(1499),
//!     false,
//!     &policy,
//!     &KeywordClassifier,
//! );
//! println!("{line}");
//! # Ok::<(), salestax_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;

pub use config::{TaxConfig, TaxSettings};
pub use error::{ConfigError, ConfigResult};
