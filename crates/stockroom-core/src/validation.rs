//! # Validation Module
//!
//! Input validation for the add-product form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (prompt / flags)                                │
//! │  └── Collects raw strings from the user                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name non-empty                                                    │
//! │  ├── quantity: digits only                                             │
//! │  └── price: digits with at most one decimal point                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ProductRepository                                            │
//! │  └── Accepts whatever it is given (no checks)                          │
//! │                                                                         │
//! │  Invalid input never reaches the repository                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("12").unwrap(), 12);
//! assert_eq!(parse_price("0.10").unwrap().cents(), 10);
//! assert!(parse_price("1.2.3").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Form
// =============================================================================

/// Raw values from the add-product dialog, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        ProductForm {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Checks every field and converts the form into a [`NewProduct`].
    ///
    /// Fields are checked in display order (name, quantity, price) and the
    /// first failure is returned.
    pub fn validate(&self) -> ValidationResult<NewProduct> {
        let name = validate_product_name(&self.name)?;
        let quantity = parse_quantity(&self.quantity)?;
        let price = parse_price(&self.price)?;

        Ok(NewProduct {
            name,
            quantity,
            price,
        })
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Returns
/// The name exactly as entered, surrounding spaces included.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a quantity.
///
/// ## Rules
/// - ASCII digits only: no sign, no spaces, no decimal point
/// - Must fit in an i64
///
/// ```text
///   "5"    → Ok(5)
///   "007"  → Ok(7)
///   "-1"   → Err(InvalidFormat)
///   "2.5"  → Err(InvalidFormat)
///   ""     → Err(Required)
/// ```
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_format(
            "quantity",
            "must be a non-negative whole number",
        ));
    }

    raw.parse::<i64>()
        .map_err(|_| invalid_format("quantity", "is too large"))
}

/// Parses a price into [`Money`].
///
/// ## Rules
/// - ASCII digits with at most one decimal point, at least one digit
/// - No sign, no spaces, no thousands separators
/// - More than two fraction digits round to the nearest cent,
///   ties to even
///
/// ```text
///   "2.50"   → 250 cents
///   ".5"     → 50 cents
///   "3."     → 300 cents
///   "0.125"  → 12 cents   (tie, 12 is even)
///   "0.135"  → 14 cents   (tie, 14 is even)
///   "1.2.3"  → Err(InvalidFormat)
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));

    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(whole) || !digits_only(frac) || (whole.is_empty() && frac.is_empty()) {
        return Err(invalid_format(
            "price",
            "must be a non-negative number with at most one decimal point",
        ));
    }

    let too_large = || invalid_format("price", "is too large");

    let whole_units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| too_large())?
    };

    let frac = frac.as_bytes();
    let digit = |i: usize| frac.get(i).map_or(0, |b| i64::from(b - b'0'));
    let mut cents = digit(0) * 10 + digit(1);

    // Round half to even on the digits past the second
    if let Some((&first, tail)) = frac.get(2..).and_then(|rest| rest.split_first()) {
        let tail_nonzero = tail.iter().any(|&b| b != b'0');
        let round_up = match first {
            b'6'..=b'9' => true,
            b'5' => tail_nonzero || cents % 2 == 1,
            _ => false,
        };
        if round_up {
            cents += 1;
        }
    }

    whole_units
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .map(Money::from_cents)
        .ok_or_else(too_large)
}

/// Validates a low-stock threshold.
///
/// ## Rules
/// - Must be non-negative
pub fn validate_threshold(threshold: i64) -> ValidationResult<i64> {
    if threshold < 0 {
        return Err(ValidationError::TooSmall {
            field: "threshold".to_string(),
            min: 0,
        });
    }

    Ok(threshold)
}

fn invalid_format(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Widget").unwrap(), "Widget");

        assert!(matches!(
            validate_product_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_name("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_name_kept_as_entered() {
        assert_eq!(validate_product_name("  Bolt  ").unwrap(), "  Bolt  ");

        let product = ProductForm::new(" Bolt", "3", "0.10").validate().unwrap();
        assert_eq!(product.name, " Bolt");
    }

    #[test]
    fn test_long_name_accepted() {
        let name = "A".repeat(201);
        let product = ProductForm::new(name.as_str(), "1", "1").validate().unwrap();
        assert_eq!(product.name, name);
        assert!(validate_product_name(&"x".repeat(10_000)).is_ok());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity("007").unwrap(), 7);

        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["-1", "+1", "2.5", " 5", "5 ", "five", "1e3"] {
            assert!(
                matches!(parse_quantity(bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_quantity("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.50").unwrap().cents(), 250);
        assert_eq!(parse_price("2.5").unwrap().cents(), 250);
        assert_eq!(parse_price("0.10").unwrap().cents(), 10);
        assert_eq!(parse_price("12").unwrap().cents(), 1200);
        assert_eq!(parse_price(".5").unwrap().cents(), 50);
        assert_eq!(parse_price("3.").unwrap().cents(), 300);
        assert_eq!(parse_price("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_price_rounds_half_to_even() {
        assert_eq!(parse_price("0.125").unwrap().cents(), 12);
        assert_eq!(parse_price("0.135").unwrap().cents(), 14);
        assert_eq!(parse_price("0.1251").unwrap().cents(), 13);
        assert_eq!(parse_price("0.124").unwrap().cents(), 12);
        assert_eq!(parse_price("0.126").unwrap().cents(), 13);
        assert_eq!(parse_price("1.995").unwrap().cents(), 200);
        assert_eq!(parse_price("0.1250000").unwrap().cents(), 12);
    }

    #[test]
    fn test_parse_price_rejects_malformed() {
        assert!(matches!(
            parse_price(""),
            Err(ValidationError::Required { .. })
        ));
        for bad in [".", "1.2.3", "-1", "+1", "1,50", " 1", "abc", "1e2", "$5"] {
            assert!(
                matches!(parse_price(bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_price("99999999999999999999").is_err());
        assert!(parse_price("92233720368547758.07").is_ok());
        assert!(parse_price("92233720368547758.08").is_err());
    }

    #[test]
    fn test_form_validate() {
        let product = ProductForm::new("Bolt", "3", "0.10").validate().unwrap();
        assert_eq!(product, NewProduct::new("Bolt", 3, Money::from_cents(10)));
    }

    #[test]
    fn test_form_reports_first_bad_field() {
        let err = ProductForm::new("", "x", "y").validate().unwrap_err();
        assert_eq!(err.field(), "name");

        let err = ProductForm::new("Bolt", "x", "y").validate().unwrap_err();
        assert_eq!(err.field(), "quantity");

        let err = ProductForm::new("Bolt", "3", "y").validate().unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_validate_threshold() {
        assert_eq!(validate_threshold(10).unwrap(), 10);
        assert_eq!(validate_threshold(0).unwrap(), 0);
        assert!(matches!(
            validate_threshold(-1),
            Err(ValidationError::TooSmall { min: 0, .. })
        ));
    }
}
