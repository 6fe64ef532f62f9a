//! # Product Classification
//!
//! Decides which tax category a product belongs to from its free-text name.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Imported Box of CHOCOLATES"                                           │
//! │       │                                                                 │
//! │       ▼  lowercase                                                      │
//! │  "imported box of chocolates"                                           │
//! │       │                                                                 │
//! │       ├── contains a medical keyword?  → Medical                        │
//! │       ├── contains a food keyword?     → Food      ◄── "chocolate"      │
//! │       ├── contains "book"?             → Book                           │
//! │       └── otherwise                    → General                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Matching is by substring, so "notebook" is a book and "steak" contains
//! "tea". The three exempt categories are taxed the same way, so the order
//! of the checks only affects which category is reported.

use crate::types::ProductCategory;

/// Keywords that mark a product as medical.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "tablet",
    "medicine",
    "pill",
    "syrup",
    "ointment",
    "capsule",
    "bandage",
    "iodine",
    "headache",
    "pharmaceutical",
];

/// Keywords that mark a product as food.
pub const FOOD_KEYWORDS: &[&str] = &[
    "chocolate",
    "chips",
    "bread",
    "apple",
    "banana",
    "milk",
    "coffee",
    "tea",
    "cake",
    "sandwich",
    "cookie",
    "snack",
    "candy",
    "juice",
];

/// Keyword that marks a product as a book.
pub const BOOK_KEYWORD: &str = "book";

// =============================================================================
// Classifier Trait
// =============================================================================

/// Maps a product name to a tax category.
///
/// [`KeywordClassifier`] is the standard implementation. Any
/// `Fn(&str) -> ProductCategory` closure also works, which keeps tests and
/// special cases from needing a new type.
///
/// ## Example
/// ```rust
/// use salestax_core::classify::Classifier;
/// use salestax_core::types::ProductCategory;
///
/// let everything_is_food = |_: &str| ProductCategory::Food;
/// assert_eq!(everything_is_food.classify("perfume"), ProductCategory::Food);
/// ```
pub trait Classifier: Send + Sync {
    /// Returns the category for `product_name`.
    fn classify(&self, product_name: &str) -> ProductCategory;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> ProductCategory + Send + Sync,
{
    fn classify(&self, product_name: &str) -> ProductCategory {
        self(product_name)
    }
}

// =============================================================================
// Keyword Classifier
// =============================================================================

/// Case-insensitive keyword matcher over the fixed keyword lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn is_medical(&self, product_name: &str) -> bool {
        contains_any(&product_name.to_lowercase(), MEDICAL_KEYWORDS)
    }

    pub fn is_food(&self, product_name: &str) -> bool {
        contains_any(&product_name.to_lowercase(), FOOD_KEYWORDS)
    }

    pub fn is_book(&self, product_name: &str) -> bool {
        product_name.to_lowercase().contains(BOOK_KEYWORD)
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, product_name: &str) -> ProductCategory {
        let name = product_name.to_lowercase();

        if contains_any(&name, MEDICAL_KEYWORDS) {
            ProductCategory::Medical
        } else if contains_any(&name, FOOD_KEYWORDS) {
            ProductCategory::Food
        } else if name.contains(BOOK_KEYWORD) {
            ProductCategory::Book
        } else {
            ProductCategory::General
        }
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> ProductCategory {
        KeywordClassifier.classify(name)
    }

    #[test]
    fn test_medical_keywords() {
        assert_eq!(classify("packet of headache pills"), ProductCategory::Medical);
        assert_eq!(classify("cough syrup"), ProductCategory::Medical);
        assert_eq!(classify("box of bandages"), ProductCategory::Medical);
        for keyword in MEDICAL_KEYWORDS {
            assert_eq!(classify(keyword), ProductCategory::Medical, "{keyword}");
        }
    }

    #[test]
    fn test_food_keywords() {
        assert_eq!(classify("chocolate bar"), ProductCategory::Food);
        assert_eq!(classify("box of imported chocolates"), ProductCategory::Food);
        assert_eq!(classify("orange juice"), ProductCategory::Food);
        for keyword in FOOD_KEYWORDS {
            assert_eq!(classify(keyword), ProductCategory::Food, "{keyword}");
        }
    }

    #[test]
    fn test_book_keyword() {
        assert_eq!(classify("book"), ProductCategory::Book);
        assert_eq!(classify("Hardcover Book"), ProductCategory::Book);
    }

    #[test]
    fn test_general_items() {
        assert_eq!(classify("music CD"), ProductCategory::General);
        assert_eq!(classify("bottle of perfume"), ProductCategory::General);
        assert_eq!(classify(""), ProductCategory::General);
        assert_eq!(classify("   "), ProductCategory::General);
    }

    #[test]
    fn test_case_insensitive() {
        for name in ["Chocolate Bar", "CHOCOLATE BAR", "chocolate bar"] {
            assert_eq!(classify(name), ProductCategory::Food, "{name}");
        }
    }

    #[test]
    fn test_substring_semantics() {
        assert_eq!(classify("leather notebook"), ProductCategory::Book);
        assert_eq!(classify("steak"), ProductCategory::Food);
        assert_eq!(classify("pillow"), ProductCategory::Medical);
    }

    #[test]
    fn test_medical_reported_before_food_and_book() {
        assert_eq!(classify("chocolate headache tablets"), ProductCategory::Medical);
        assert_eq!(classify("cookie book"), ProductCategory::Food);
    }

    #[test]
    fn test_predicates() {
        let classifier = KeywordClassifier;
        assert!(classifier.is_medical("Iodine"));
        assert!(!classifier.is_medical("bread"));
        assert!(classifier.is_food("Bread"));
        assert!(classifier.is_book("BOOKS"));
        assert!(!classifier.is_book(""));
    }

    #[test]
    fn test_closure_classifier() {
        let only_books = |name: &str| {
            if name.ends_with("novel") {
                ProductCategory::Book
            } else {
                ProductCategory::General
            }
        };
        assert_eq!(only_books.classify("crime novel"), ProductCategory::Book);
        assert_eq!(only_books.classify("chocolate"), ProductCategory::General);
    }
}
