//! # Error Types
//!
//! Domain-specific error types for salestax-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salestax-core errors (this file)                                      │
//! │  ├── CoreError        - Policy / domain errors                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  salestax-config errors (separate crate)                               │
//! │  └── ConfigError      - File, TOML and environment failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConfigError                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lenient `SaleLine::new` never produces any of these. They only come
//! out of the strict constructors, the money parser and policy building.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tax policy was built from numbers that cannot describe a tax.
    ///
    /// ## When This Occurs
    /// - A rate above 100% (10000 bps)
    /// - A rounding increment of zero or less
    #[error("Invalid tax policy: {reason}")]
    InvalidPolicy { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the strict entry points before any tax math runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPolicy {
            reason: "rounding increment must be at least 1 cent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid tax policy: rounding increment must be at least 1 cent"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
