//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    7.15 % 0.05 = 0.04999999999999968  ❌ looks like a remainder!        │
//! │    → a tax already on a nickel boundary gets bumped another 5 cents    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    715 % 5 = 0                                                         │
//! │    The remainder test is exact, so the round-up only fires when it     │
//! │    really should                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1499); // 14.99
//!
//! // Or parse the decimal text a receipt line carries
//! let parsed: Money = "14.99".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // 29.98
//! let total = price + Money::from_cents(150);  // 16.49
//! assert_eq!(total.to_string(), "16.49");
//! # let _ = doubled;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: The lenient `SaleLine` constructor accepts negative
///   quantities and prices, so amounts must be able to go below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: serde serializes it as a bare integer of cents
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  unit price ──► × quantity ──► subtotal ──┬──────────────► + ──► line  │
/// │                                           │                ▲    value  │
/// │                                           ▼                │           │
/// │                                apply_rate(rate) ──► round_up_to_       │
/// │                                                     increment(5¢)      │
/// │                                                        = tax amount    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

/// Five cents, the increment sales tax is rounded up to.
pub const NICKEL: Money = Money::from_cents(5);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let price = Money::from_cents(1249); // Represents 12.49
    /// assert_eq!(price.cents(), 1249);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let price = Money::from_major_minor(47, 50); // 47.50
    /// assert_eq!(price.cents(), 4750);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a rate and rounds the result to whole cents, half away from zero.
    ///
    /// ## Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF AWAY FROM ZERO                                          │
    /// │                                                                     │
    /// │   7.125 → 7.13      -7.125 → -7.13                                  │
    /// │   1.499 → 1.50       0.845 →  0.85                                  │
    /// │                                                                     │
    /// │  Not bankers rounding. The two differ after the nickel round-up     │
    /// │  when the even neighbour sits on a boundary:                        │
    /// │    0.105 → 0.11 → 0.15   (half away from zero)                      │
    /// │    0.105 → 0.10 → 0.10   (half to even)                             │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// `cents * bps` is the exact amount scaled by 10000. Adding (or, for
    /// negatives, subtracting) 5000 before the truncating division rounds
    /// the half away from zero. i128 keeps the product from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(4750);     // 47.50
    /// let rate = TaxRate::from_percent(15);    // 15%
    ///
    /// // 47.50 × 15% = 7.125 → 7.13
    /// assert_eq!(price.apply_rate(rate).cents(), 713);
    /// ```
    pub fn apply_rate(&self, rate: TaxRate) -> Money {
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = BPS_SCALE / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / BPS_SCALE
        } else {
            (scaled - half) / BPS_SCALE
        };
        Money(rounded as i64)
    }

    /// Rounds up to the next multiple of `increment`.
    ///
    /// Uses the truncated remainder, whose sign follows the amount: a
    /// positive amount off the boundary is lifted to the next multiple,
    /// while zero, exact multiples and negative amounts are left as they
    /// are. A non-positive increment leaves the value untouched.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::{Money, NICKEL};
    ///
    /// assert_eq!(Money::from_cents(713).round_up_to_increment(NICKEL).cents(), 715);
    /// assert_eq!(Money::from_cents(150).round_up_to_increment(NICKEL).cents(), 150);
    /// assert_eq!(Money::from_cents(1).round_up_to_increment(NICKEL).cents(), 5);
    /// ```
    pub fn round_up_to_increment(&self, increment: Money) -> Money {
        if increment.0 <= 0 {
            return *self;
        }

        let remainder = self.0 % increment.0;
        if remainder > 0 {
            Money(self.0 + increment.0 - remainder)
        } else {
            *self
        }
    }

    /// Checks if the value is an exact multiple of `increment`.
    #[inline]
    pub const fn is_multiple_of(&self, increment: Money) -> bool {
        increment.0 != 0 && self.0 % increment.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1125); // 11.25
    /// let subtotal = unit_price.multiply_quantity(3);
    /// assert_eq!(subtotal.cents(), 3375); // 33.75
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn invalid_price(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    }
}

/// Parses decimal text such as `"12.49"`, `"-0.5"`, `"+7"` or `".85"`.
///
/// At most two fractional digits are accepted; a third digit would be a
/// fraction of a cent, which `Money` cannot hold exactly.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (major, minor) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(invalid_price("must contain at least one digit"));
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) {
            return Err(invalid_price("must be a decimal number like 12.49"));
        }

        if minor.len() > 2 {
            return Err(invalid_price("must have at most two decimal places"));
        }

        let too_large = || invalid_price("is too large");

        let major_value: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| too_large())?
        };

        let minor_value: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => minor.parse().map_err(|_| too_large())?,
        };

        let cents = major_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_value))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering, the way receipt lines print amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1649).to_string(), "16.49");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running, b);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("12.49".parse::<Money>().unwrap().cents(), 1249);
        assert_eq!("0.85".parse::<Money>().unwrap().cents(), 85);
        assert_eq!(".85".parse::<Money>().unwrap().cents(), 85);
        assert_eq!("7".parse::<Money>().unwrap().cents(), 700);
        assert_eq!("7.5".parse::<Money>().unwrap().cents(), 750);
        assert_eq!("7.".parse::<Money>().unwrap().cents(), 700);
        assert_eq!(" +10.00 ".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("-0.5".parse::<Money>().unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "1.234".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!("abc".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("1,50".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
        assert!("--1".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_apply_rate_rounds_half_away_from_zero() {
        // 14.99 at 10% = 1.499 → 1.50
        assert_eq!(Money::from_cents(1499).apply_rate(TaxRate::from_percent(10)).cents(), 150);
        // 47.50 at 15% = 7.125 → 7.13
        assert_eq!(Money::from_cents(4750).apply_rate(TaxRate::from_percent(15)).cents(), 713);
        // 0.25 at 10% = 0.025 → 0.03
        assert_eq!(Money::from_cents(25).apply_rate(TaxRate::from_percent(10)).cents(), 3);
        // -0.25 at 10% = -0.025 → -0.03
        assert_eq!(Money::from_cents(-25).apply_rate(TaxRate::from_percent(10)).cents(), -3);
        // 0.24 at 10% = 0.024 → 0.02
        assert_eq!(Money::from_cents(24).apply_rate(TaxRate::from_percent(10)).cents(), 2);
    }

    #[test]
    fn test_apply_rate_does_not_overflow() {
        let huge = Money::from_cents(i64::MAX / 2);
        let tax = huge.apply_rate(TaxRate::from_percent(10));
        assert!(tax.is_positive());
    }

    #[test]
    fn test_round_up_to_increment() {
        assert_eq!(Money::from_cents(713).round_up_to_increment(NICKEL).cents(), 715);
        assert_eq!(Money::from_cents(715).round_up_to_increment(NICKEL).cents(), 715);
        assert_eq!(Money::from_cents(0).round_up_to_increment(NICKEL).cents(), 0);
        assert_eq!(Money::from_cents(1).round_up_to_increment(NICKEL).cents(), 5);
        assert_eq!(Money::from_cents(4).round_up_to_increment(NICKEL).cents(), 5);
        assert_eq!(Money::from_cents(6).round_up_to_increment(NICKEL).cents(), 10);
    }

    #[test]
    fn test_round_up_leaves_negative_amounts_alone() {
        // Truncated remainder of -123 by 5 is -3, which is not above zero.
        assert_eq!(Money::from_cents(-123).round_up_to_increment(NICKEL).cents(), -123);
    }

    #[test]
    fn test_round_up_with_non_positive_increment() {
        let amount = Money::from_cents(713);
        assert_eq!(amount.round_up_to_increment(Money::zero()), amount);
        assert_eq!(amount.round_up_to_increment(Money::from_cents(-5)), amount);
    }

    #[test]
    fn test_is_multiple_of() {
        assert!(Money::from_cents(715).is_multiple_of(NICKEL));
        assert!(!Money::from_cents(713).is_multiple_of(NICKEL));
        assert!(!Money::from_cents(10).is_multiple_of(Money::zero()));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
        assert_eq!(unit_price.multiply_quantity(0).cents(), 0);
        assert_eq!(unit_price.multiply_quantity(-2).cents(), -598);
    }
}
