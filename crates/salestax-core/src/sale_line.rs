//! # Sale Line
//!
//! One purchased item with its tax and tax-inclusive total.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  (qty, name, price, imported)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SaleLine::new ──► classify(name) ──► rate_for(category, imported)     │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                  subtotal = price × qty ──► tax_on(subtotal, rate)     │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                        line_value = subtotal + tax   (frozen)           │
//! │                                                                         │
//! │  No setters: every field is fixed once construction returns.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::classify::{Classifier, KeywordClassifier};
use crate::money::Money;
use crate::tax::TaxPolicy;
use crate::types::{ProductCategory, TaxRate};
use crate::validation::{validate_price, validate_quantity, ValidationResult};

/// An immutable sale line.
///
/// `line_value == price × quantity + tax_amount` holds for every instance,
/// because the only way to get one is through a constructor that computes
/// both together.
///
/// ## Example
/// ```rust
/// use salestax_core::{Money, SaleLine};
///
/// let line = SaleLine::new(1, "music CD", Money::from_cents(1499), false);
/// assert_eq!(line.tax_amount().cents(), 150);
/// assert_eq!(line.line_value().cents(), 1649);
/// assert_eq!(line.to_string(), "1 music CD: 16.49");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    product_name: String,
    price: Money,
    is_imported: bool,
    quantity: i64,
    category: ProductCategory,
    tax_rate: TaxRate,
    tax_amount: Money,
    line_value: Money,
}

impl SaleLine {
    /// Builds a line under the standard policy and keyword classifier.
    ///
    /// Never fails. Zero or negative quantities and prices are computed
    /// arithmetically (a -1 quantity gives a negative line). Use
    /// [`SaleLine::try_new`] to reject them instead.
    pub fn new(
        quantity: i64,
        product_name: impl Into<String>,
        price: Money,
        is_imported: bool,
    ) -> Self {
        Self::with_policy(
            quantity,
            product_name,
            price,
            is_imported,
            &TaxPolicy::standard(),
            &KeywordClassifier,
        )
    }

    /// Like [`SaleLine::new`], but validates quantity and price first.
    ///
    /// ## Rules
    /// - quantity in 1..=999
    /// - price >= 0
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{Money, SaleLine};
    ///
    /// assert!(SaleLine::try_new(1, "book", Money::from_cents(1249), false).is_ok());
    /// assert!(SaleLine::try_new(-1, "book", Money::from_cents(1249), false).is_err());
    /// assert!(SaleLine::try_new(1, "book", Money::from_cents(-1), false).is_err());
    /// ```
    pub fn try_new(
        quantity: i64,
        product_name: impl Into<String>,
        price: Money,
        is_imported: bool,
    ) -> ValidationResult<Self> {
        validate_quantity(quantity)?;
        validate_price(price)?;
        Ok(Self::new(quantity, product_name, price, is_imported))
    }

    /// Builds a line under an explicit policy and classifier.
    pub fn with_policy(
        quantity: i64,
        product_name: impl Into<String>,
        price: Money,
        is_imported: bool,
        policy: &TaxPolicy,
        classifier: &dyn Classifier,
    ) -> Self {
        let product_name = product_name.into();
        let category = classifier.classify(&product_name);
        let tax_rate = policy.rate_for(category, is_imported);

        let subtotal = price.multiply_quantity(quantity);
        let tax_amount = policy.tax_on(subtotal, tax_rate);
        let line_value = subtotal + tax_amount;

        debug!(
            product = %product_name,
            %category,
            imported = is_imported,
            rate_bps = tax_rate.bps(),
            subtotal = %subtotal,
            tax = %tax_amount,
            "Computed sale line"
        );

        SaleLine {
            product_name,
            price,
            is_imported,
            quantity,
            category,
            tax_rate,
            tax_amount,
            line_value,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_imported(&self) -> bool {
        self.is_imported
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Tax-inclusive total.
    pub fn line_value(&self) -> Money {
        self.line_value
    }

    pub fn tax_amount(&self) -> Money {
        self.tax_amount
    }

    /// Pre-tax total (`price × quantity`).
    pub fn subtotal(&self) -> Money {
        self.line_value - self.tax_amount
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    /// The combined rate the tax was computed at.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }
}

/// Receipt rendering: `{quantity} [imported ]{name}: {line value}`.
///
/// The `imported ` prefix is added whenever the flag is set, even if the
/// name already says so.
impl fmt::Display for SaleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_imported { "imported " } else { "" };
        write!(
            f,
            "{} {}{}: {}",
            self.quantity, prefix, self.product_name, self.line_value
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
