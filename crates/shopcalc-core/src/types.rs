//! # Domain Types
//!
//! Core domain types used throughout ShopCalc.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Bill       │   │    Expense      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  customer_name  │   │  description    │       │
//! │  │  price (per kg) │   │  totals + items │   │  amount         │       │
//! │  │  is_favorite    │   │  payment_method │   │  category       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  PricingMode    │   │ PaymentMethod   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Weight         │   │  Cash (default) │                             │
//! │  │  Quantity       │   │  Card Upi Other │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bills are append-only: created by finalizing a cart, deletable, never
//! updated. The cart lines they were built from travel inside the bill as a
//! JSON snapshot so deleting a product later cannot rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::DEFAULT_CATEGORY;

// =============================================================================
// Pricing Mode
// =============================================================================

/// How the active billing inputs price an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Price is per kilogram, the second input is grams.
    #[default]
    Weight,
    /// Price is per unit, the second input is a count.
    Quantity,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a bill was settled.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    #[default]
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// UPI / instant bank transfer.
    Upi,
    /// Anything else (store credit, barter, ...).
    Other,
}

impl PaymentMethod {
    /// All methods, in the order a tender picker shows them.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::Other,
    ];

    /// Human-readable label, as printed on receipts and exports.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Other => "Other",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product, used to prefill the price input.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on quick-pick tiles and in the picker.
    pub name: String,

    /// Price per kilogram in shop currency units.
    pub price: f64,

    /// Favorites surface on the home screen grid.
    pub is_favorite: bool,

    /// Free-form category; defaults to "General".
    pub category: String,

    /// Informational stock count (0 = untracked).
    pub stock: i64,

    /// Barcode (EAN-13, UPC-A, ...), when known.
    pub barcode: Option<String>,
}

impl Product {
    /// Creates a product with a fresh id.
    ///
    /// The name is trimmed and a blank category falls back to
    /// [`DEFAULT_CATEGORY`]; numeric validation is the caller's job.
    pub fn new(name: &str, price: f64, category: &str, stock: i64) -> Self {
        let category = category.trim();
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            price,
            is_favorite: false,
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            stock,
            barcode: None,
        }
    }
}

// =============================================================================
// Bill
// =============================================================================

/// A finalized, persisted bill. Immutable once created.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Customer name, or the walk-in placeholder when none was entered.
    pub customer_name: String,
    pub customer_phone: String,
    /// Sum of line totals before discount and tax.
    pub sub_total: f64,
    /// Discount amount (not the percentage).
    pub discount: f64,
    /// Tax amount (not the percentage).
    pub tax: f64,
    /// What the customer actually paid.
    pub final_total: f64,
    /// JSON snapshot of the cart lines at finalize time.
    pub items_json: String,
    pub payment_method: PaymentMethod,
}

impl Bill {
    /// Decodes the line-item snapshot.
    ///
    /// A corrupt snapshot decodes to an empty list rather than failing the
    /// whole history view.
    pub fn lines(&self) -> Vec<CartLine> {
        serde_json::from_str(&self.items_json).unwrap_or_default()
    }

    /// Number of line items on the bill.
    pub fn line_count(&self) -> usize {
        self.lines().len()
    }
}

// =============================================================================
// Expense
// =============================================================================

/// An operating expense entry.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl Expense {
    /// Creates an expense stamped with the current time.
    pub fn new(description: &str, amount: f64, category: &str) -> Self {
        Expense {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            description: description.trim().to_string(),
            amount,
            category: category.trim().to_string(),
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
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Cash.label(), "Cash");
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }

    #[test]
    fn test_product_category_fallback() {
        let product = Product::new("  Sugar ", 45.0, "  ", 0);
        assert_eq!(product.name, "Sugar");
        assert_eq!(product.category, "General");
        assert!(!product.is_favorite);
    }

    #[test]
    fn test_bill_lines_tolerates_garbage() {
        let bill = Bill {
            id: "b1".to_string(),
            created_at: Utc::now(),
            customer_name: "Walk-in".to_string(),
            customer_phone: String::new(),
            sub_total: 10.0,
            discount: 0.0,
            tax: 0.0,
            final_total: 10.0,
            items_json: "not json".to_string(),
            payment_method: PaymentMethod::Cash,
        };

        assert!(bill.lines().is_empty());
        assert_eq!(bill.line_count(), 0);
    }
}
