//! # salestax-core: Sales Tax for Single Sale Lines
//!
//! This crate computes the sales tax and tax-inclusive total of one
//! purchased item. It contains pure functions only, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Caller (receipt printer, batch job, CLI …)             │   │
//! │  │     parses input, builds lines, prints / sums the results       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ salestax-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ classify  │  │    tax    │  │   money   │  │ sale_line │  │   │
//! │  │   │ keywords  │  │ TaxPolicy │  │   Money   │  │ SaleLine  │  │   │
//! │  │   │ category  │  │ rounding  │  │  TaxRate  │  │  Display  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ TaxPolicy                              │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │               salestax-config (TOML + environment)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - TaxRate and ProductCategory
//! - [`classify`] - Product name → tax category
//! - [`tax`] - Rate composition and the round-up-to-5-cents rule
//! - [`sale_line`] - The immutable SaleLine
//! - [`validation`] - Checks used by the strict constructors
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no shared state
//! 2. **Integer Money**: amounts in cents (i64), rates in basis points (u32)
//! 3. **Explicit Errors**: typed errors on the strict paths, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use salestax_core::{Money, SaleLine};
//!
//! let perfume = SaleLine::new(1, "bottle of perfume", Money::from_cents(4750), true);
//!
//! // 47.50 × 15% = 7.125 → 7.13 → rounded up to 7.15
//! assert_eq!(perfume.tax_amount().cents(), 715);
//! assert_eq!(perfume.to_string(), "1 imported bottle of perfume: 54.65");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod classify;
pub mod error;
pub mod money;
pub mod sale_line;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use classify::{Classifier, KeywordClassifier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use sale_line::SaleLine;
pub use tax::{calculate_tax, TaxPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted by the strict `SaleLine::try_new`.
///
/// ## Business Reason
/// Catches typos like 1000 instead of 10 at the till.
pub const MAX_ITEM_QUANTITY: i64 = 999;
