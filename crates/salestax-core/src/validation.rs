//! # Validation Module
//!
//! Input validation for the strict entry points.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Ways In                                        │
//! │                                                                         │
//! │  SaleLine::new(…)       lenient: no checks, arithmetic decides         │
//! │                         (-2 × 5.00 is simply a -10.00 line)            │
//! │                                                                         │
//! │  SaleLine::try_new(…)   strict: THIS MODULE runs first                 │
//! │  ├── quantity in 1..=999                                               │
//! │  └── price >= 0                                                        │
//! │                                                                         │
//! │  TaxPolicy::new(…)      always checked                                 │
//! │  ├── rates <= 100%                                                     │
//! │  └── rounding increment >= 1 cent                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::validation::{validate_price, validate_quantity};
//! use salestax_core::Money;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sale Line Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use salestax_core::validation::validate_price;
/// use salestax_core::Money;
///
/// assert!(validate_price(Money::from_cents(1249)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Policy Validators
// =============================================================================

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates the increment tax is rounded up to.
pub fn validate_rounding_increment(increment: Money) -> ValidationResult<()> {
    if !increment.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "rounding increment".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_quantity_errors() {
        assert_eq!(
            validate_quantity(-3),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert!(matches!(
            validate_quantity(5000),
            Err(ValidationError::OutOfRange { max: 999, .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps("basic rate", 0).is_ok());
        assert!(validate_tax_rate_bps("basic rate", 1000).is_ok());
        assert!(validate_tax_rate_bps("basic rate", 10000).is_ok());

        let err = validate_tax_rate_bps("import duty", 10001).unwrap_err();
        assert_eq!(err.to_string(), "import duty must be between 0 and 10000");
    }

    #[test]
    fn test_validate_rounding_increment() {
        assert!(validate_rounding_increment(Money::from_cents(5)).is_ok());
        assert!(validate_rounding_increment(Money::from_cents(1)).is_ok());
        assert!(validate_rounding_increment(Money::zero()).is_err());
        assert!(validate_rounding_increment(Money::from_cents(-5)).is_err());
    }
}
