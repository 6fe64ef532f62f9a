//! # Tax Calculation
//!
//! Rate composition and the rounding rule for sales tax.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  category ──► exempt? ──yes──► 0%  ─┐                                  │
//! │                   │                  ├──► + 5% if imported ──► rate     │
//! │                   └──no───► 10% ────┘                                  │
//! │                                                                         │
//! │  subtotal × rate ──► round to cents ──► round UP to 0.05 ──► tax        │
//! │                      (half away 0)                                      │
//! │                                                                         │
//! │  Worked example: 47.50, imported perfume                               │
//! │    rate      = 10% + 5% = 15%                                          │
//! │    raw       = 7.125  → 7.13                                           │
//! │    remainder = 7.13 mod 0.05 = 0.03 → + 0.02                           │
//! │    tax       = 7.15                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, NICKEL};
use crate::types::{ProductCategory, TaxRate};
use crate::validation::{validate_rounding_increment, validate_tax_rate_bps};

/// Basic sales tax on non-exempt goods.
pub const BASIC_RATE: TaxRate = TaxRate::from_percent(10);

/// Surcharge on every imported good, exempt or not.
pub const IMPORT_DUTY: TaxRate = TaxRate::from_percent(5);

// =============================================================================
// Tax Policy
// =============================================================================

/// The numbers the tax calculation runs on.
///
/// [`TaxPolicy::standard`] is 10% basic, 5% import duty, rounded up to
/// 5 cents. Other values come from configuration and go through
/// [`TaxPolicy::new`], which rejects impossible ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxPolicy {
    basic_rate: TaxRate,
    import_duty: TaxRate,
    rounding_increment: Money,
}

impl TaxPolicy {
    /// The standard policy.
    pub const fn standard() -> Self {
        TaxPolicy {
            basic_rate: BASIC_RATE,
            import_duty: IMPORT_DUTY,
            rounding_increment: NICKEL,
        }
    }

    /// Builds a policy, validating every number.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::tax::TaxPolicy;
    /// use salestax_core::{Money, TaxRate};
    ///
    /// let policy = TaxPolicy::new(
    ///     TaxRate::from_percent(8),
    ///     TaxRate::from_percent(3),
    ///     Money::from_cents(1),
    /// ).unwrap();
    /// assert_eq!(policy.basic_rate().bps(), 800);
    ///
    /// assert!(TaxPolicy::new(TaxRate::from_percent(10), TaxRate::from_percent(5), Money::zero()).is_err());
    /// ```
    pub fn new(
        basic_rate: TaxRate,
        import_duty: TaxRate,
        rounding_increment: Money,
    ) -> CoreResult<Self> {
        validate_tax_rate_bps("basic rate", basic_rate.bps())?;
        validate_tax_rate_bps("import duty", import_duty.bps())?;
        validate_rounding_increment(rounding_increment)?;

        if (basic_rate + import_duty).bps() > 10000 {
            return Err(CoreError::InvalidPolicy {
                reason: format!(
                    "basic rate {} plus import duty {} exceeds 100%",
                    basic_rate, import_duty
                ),
            });
        }

        Ok(TaxPolicy {
            basic_rate,
            import_duty,
            rounding_increment,
        })
    }

    pub fn basic_rate(&self) -> TaxRate {
        self.basic_rate
    }

    pub fn import_duty(&self) -> TaxRate {
        self.import_duty
    }

    pub fn rounding_increment(&self) -> Money {
        self.rounding_increment
    }

    /// Effective rate for a category and import status.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::tax::TaxPolicy;
    /// use salestax_core::ProductCategory;
    ///
    /// let policy = TaxPolicy::standard();
    /// assert_eq!(policy.rate_for(ProductCategory::General, false).bps(), 1000);
    /// assert_eq!(policy.rate_for(ProductCategory::General, true).bps(), 1500);
    /// assert_eq!(policy.rate_for(ProductCategory::Food, false).bps(), 0);
    /// assert_eq!(policy.rate_for(ProductCategory::Food, true).bps(), 500);
    /// ```
    pub fn rate_for(&self, category: ProductCategory, is_imported: bool) -> TaxRate {
        let base = if category.is_exempt() {
            TaxRate::zero()
        } else {
            self.basic_rate
        };

        if is_imported {
            base + self.import_duty
        } else {
            base
        }
    }

    /// Tax on `value` at `rate`, rounded with this policy's increment.
    pub fn tax_on(&self, value: Money, rate: TaxRate) -> Money {
        calculate_tax(value, rate, self.rounding_increment)
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy::standard()
    }
}

// =============================================================================
// Tax Calculation
// =============================================================================

/// Calculates the tax on `value` at `rate`, rounded up to `increment`.
///
/// 1. `value × rate`, rounded to cents half away from zero
/// 2. rounded up to the next multiple of `increment`
///
/// ## Example
/// ```rust
/// use salestax_core::money::{Money, NICKEL};
/// use salestax_core::tax::calculate_tax;
/// use salestax_core::TaxRate;
///
/// // 14.99 at 10% = 1.499 → 1.50, already on a nickel
/// let tax = calculate_tax(Money::from_cents(1499), TaxRate::from_percent(10), NICKEL);
/// assert_eq!(tax.cents(), 150);
///
/// // 47.50 at 15% = 7.125 → 7.13 → 7.15
/// let tax = calculate_tax(Money::from_cents(4750), TaxRate::from_percent(15), NICKEL);
/// assert_eq!(tax.cents(), 715);
/// ```
pub fn calculate_tax(value: Money, rate: TaxRate, increment: Money) -> Money {
    value.apply_rate(rate).round_up_to_increment(increment)
}

// =============================================================================
// Unit Tests
// =============================================================================
