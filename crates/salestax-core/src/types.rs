//! # Domain Types
//!
//! Small value types shared by the tax calculation.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                        │
//! │  │    TaxRate      │   │   ProductCategory    │                        │
//! │  │  ─────────────  │   │  ──────────────────  │                        │
//! │  │  bps (u32)      │   │  Medical  (exempt)   │                        │
//! │  │  1000 = 10%     │   │  Food     (exempt)   │                        │
//! │  │   500 =  5%     │   │  Book     (exempt)   │                        │
//! │  └─────────────────┘   │  General  (taxed)    │                        │
//! │                        └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (basic sales tax), 500 bps = 5% (import duty).
/// Whole-number rates compose by plain integer addition, with no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a whole percentage.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_percent(15).bps(), 1500);
    /// ```
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        TaxRate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Rates stack: an imported general item pays basic + import duty.
impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

/// Renders as a percentage, e.g. `15%` or `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;
        if fraction == 0 {
            write!(f, "{}%", whole)
        } else if fraction % 10 == 0 {
            write!(f, "{}.{}%", whole, fraction / 10)
        } else {
            write!(f, "{}.{:02}%", whole, fraction)
        }
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// The tax category a product name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Medicines and first-aid goods.
    Medical,
    /// Groceries and snacks.
    Food,
    /// Books.
    Book,
    /// Everything else.
    #[default]
    General,
}

impl ProductCategory {
    /// Returns true if the category is exempt from basic sales tax.
    ///
    /// Import duty still applies to exempt goods.
    pub fn is_exempt(&self) -> bool {
        matches!(
            self,
            ProductCategory::Medical | ProductCategory::Food | ProductCategory::Book
        )
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Medical => write!(f, "medical"),
            ProductCategory::Food => write!(f, "food"),
            ProductCategory::Book => write!(f, "book"),
            ProductCategory::General => write!(f, "general"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!(!rate.is_zero());
    }

    #[test]
    fn test_tax_rate_from_percent() {
        assert_eq!(TaxRate::from_percent(10), TaxRate::from_bps(1000));
        assert!(TaxRate::from_percent(0).is_zero());
    }

    #[test]
    fn test_tax_rates_add() {
        let combined = TaxRate::from_percent(10) + TaxRate::from_percent(5);
        assert_eq!(combined.bps(), 1500);
        assert_eq!(TaxRate::zero() + TaxRate::from_percent(5), TaxRate::from_percent(5));
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_percent(15).to_string(), "15%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(750).to_string(), "7.5%");
        assert_eq!(TaxRate::from_bps(5).to_string(), "0.05%");
        assert_eq!(TaxRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_category_exemptions() {
        assert!(ProductCategory::Medical.is_exempt());
        assert!(ProductCategory::Food.is_exempt());
        assert!(ProductCategory::Book.is_exempt());
        assert!(!ProductCategory::General.is_exempt());
    }

    #[test]
    fn test_category_default() {
        assert_eq!(ProductCategory::default(), ProductCategory::General);
    }
}
