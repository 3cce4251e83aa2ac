//! # Validation Module
//!
//! Input parsing and business rule validation for ShopCalc.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two validation styles                              │
//! │                                                                         │
//! │  Billing path (price/weight/quantity text fields)                      │
//! │  ├── parse_* functions returning Option                                │
//! │  └── None means "leave state untouched" - the add simply doesn't       │
//! │      happen, no error is shown                                         │
//! │           │                                                             │
//! │  Catalog path (products, expenses)                                     │
//! │  ├── validate_* functions returning ValidationResult                   │
//! │  └── typed errors the session layer propagates with `?`                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcalc_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_price("24.50"), Some(24.5));
//! assert_eq!(parse_price("free"), None);
//! assert_eq!(parse_quantity("3"), Some(3));
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Silent Parsers (billing path)
// =============================================================================

/// Parses a unit price entered as text.
///
/// Returns `None` for anything that is not a finite number greater than
/// zero - the caller treats that as "do nothing".
pub fn parse_price(input: &str) -> Option<f64> {
    parse_positive_decimal(input)
}

/// Parses a weight in grams entered as text.
///
/// Same rules as [`parse_price`]: finite and strictly positive, or `None`.
pub fn parse_weight_grams(input: &str) -> Option<f64> {
    parse_positive_decimal(input)
}

/// Parses a free-form money amount (expense amounts, tendered cash).
pub fn parse_amount(input: &str) -> Option<f64> {
    parse_positive_decimal(input)
}

/// Parses a quantity entered as text.
///
/// Quantities are whole numbers; `"2.5"` is rejected just like the
/// non-numeric cases.
pub fn parse_quantity(input: &str) -> Option<i64> {
    let qty: i64 = input.trim().parse().ok()?;
    if qty > 0 {
        Some(qty)
    } else {
        None
    }
}

/// Parses a discount or tax percentage entered as text.
///
/// Unlike the other parsers this never fails: an empty or malformed field
/// reads as 0%, and negative values are clamped to 0 so a percentage can
/// never invert a total.
pub fn parse_percent(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(pct) if pct.is_finite() => pct.max(0.0),
        _ => 0.0,
    }
}

fn parse_positive_decimal(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

// =============================================================================
// Typed Validators (catalog path)
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use shopcalc_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Basmati Rice").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, 200)
}

/// Validates an expense description.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_text("description", description, 200)
}

/// Validates that a money amount is a positive, finite number.
///
/// The negated comparison deliberately catches NaN as well.
pub fn validate_positive_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !(amount > 0.0) || !amount.is_finite() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
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
    fn test_parse_price() {
        assert_eq!(parse_price("24.50"), Some(24.5));
        assert_eq!(parse_price("  120 "), Some(120.0));

        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1"), Some(1));
        assert_eq!(parse_quantity("12"), Some(12));

        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-3"), None);
        assert_eq!(parse_quantity("2.5"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_parse_percent_never_fails() {
        assert_eq!(parse_percent("10"), 10.0);
        assert_eq!(parse_percent("2.5"), 2.5);
        assert_eq!(parse_percent(""), 0.0);
        assert_eq!(parse_percent("junk"), 0.0);
        // Negative percentages are clamped, not honored
        assert_eq!(parse_percent("-15"), 0.0);
        assert_eq!(parse_percent("NaN"), 0.0);
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Sugar").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount("amount", 10.0).is_ok());
        assert!(validate_positive_amount("amount", 0.0).is_err());
        assert!(validate_positive_amount("amount", -1.0).is_err());
        assert!(validate_positive_amount("amount", f64::NAN).is_err());
        assert!(validate_positive_amount("amount", f64::INFINITY).is_err());
    }
}
