//! # Cart Module
//!
//! The active billing cart: ordered line items plus the discount/tax
//! breakdown that turns them into a bill.
//!
//! ## Totals Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a cart becomes a total                           │
//! │                                                                         │
//! │  CartLine.total ──┐                                                     │
//! │  CartLine.total ──┼──► subtotal                                         │
//! │  CartLine.total ──┘       │                                             │
//! │                           ▼                                             │
//! │            discount_amount = subtotal × discount% / 100                 │
//! │                           │                                             │
//! │                           ▼                                             │
//! │            after_discount = subtotal − discount_amount                  │
//! │                           │                                             │
//! │                           ▼                                             │
//! │            tax_amount = after_discount × tax% / 100                     │
//! │                           │                                             │
//! │                           ▼                                             │
//! │            final_total = after_discount + tax_amount                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every derived value is recomputed from the line list and the percentages
//! on each read. Nothing is cached, so there is no invalidation to get
//! wrong. Amounts are stored unrounded; rounding belongs to display code.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::GRAMS_PER_KILOGRAM;

// =============================================================================
// Cart Line
// =============================================================================

/// One priced entry in the active cart.
///
/// A line is priced either by weight (grams at a per-kilogram price,
/// quantity pinned to 1) or by quantity (count at a per-unit price, weight
/// pinned to 0). Exactly one of the two holds at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Opaque unique id, used only to address the line for edits.
    pub id: String,

    /// Display name ("Custom Item" when added from bare inputs).
    pub name: String,

    /// Unit price: per kilogram in weight mode, per piece in quantity mode.
    pub price: f64,

    /// Weight in grams; 0 for quantity-priced lines.
    pub weight_grams: f64,

    /// Piece count; 1 for weight-priced lines.
    pub quantity: i64,

    /// Line total, stored unrounded.
    pub total: f64,
}

impl CartLine {
    /// Creates a weight-priced line: `total = price × grams / 1000`.
    pub fn by_weight(name: impl Into<String>, price: f64, grams: f64) -> Self {
        CartLine {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price,
            weight_grams: grams,
            quantity: 1,
            total: price * grams / GRAMS_PER_KILOGRAM,
        }
    }

    /// Creates a quantity-priced line: `total = price × quantity`.
    pub fn by_quantity(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        CartLine {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price,
            weight_grams: 0.0,
            quantity,
            total: price * quantity as f64,
        }
    }

    /// Whether this line was priced by weight.
    pub fn is_by_weight(&self) -> bool {
        self.weight_grams > 0.0
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The active cart: insertion-ordered lines plus discount/tax percentages.
///
/// ## Invariants
/// - Line order is insertion order; it carries no meaning beyond display.
/// - `discount_percent` and `tax_percent` are never negative (the setters
///   clamp, so a percentage cannot invert a total).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount_percent: f64,
    tax_percent: f64,
}

impl Cart {
    /// Creates a new empty cart with zero discount and tax.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a line to the cart.
    pub fn add_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Removes the line with the given id.
    ///
    /// Removing an id that isn't present is a no-op, so callers can fire
    /// this from stale UI state without guarding.
    pub fn remove_line(&mut self, id: &str) {
        self.lines.retain(|line| line.id != id);
    }

    /// Sets a new quantity on the line with the given id.
    ///
    /// ## Behavior
    /// - `quantity <= 0` behaves exactly like [`Cart::remove_line`]
    /// - otherwise the line keeps its position and its total becomes
    ///   `price × quantity`
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_line(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
            line.total = line.price * quantity as f64;
        }
    }

    /// Empties the cart and resets the percentages.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount_percent = 0.0;
        self.tax_percent = 0.0;
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current discount percentage (always >= 0).
    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    /// Current tax percentage (always >= 0).
    pub fn tax_percent(&self) -> f64 {
        self.tax_percent
    }

    /// Sets the discount percentage, clamping negatives to zero.
    pub fn set_discount_percent(&mut self, percent: f64) {
        self.discount_percent = if percent.is_finite() { percent.max(0.0) } else { 0.0 };
    }

    /// Sets the tax percentage, clamping negatives to zero.
    pub fn set_tax_percent(&mut self, percent: f64) {
        self.tax_percent = if percent.is_finite() { percent.max(0.0) } else { 0.0 };
    }

    /// Sum of line totals, before discount and tax.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|line| line.total).sum()
    }

    /// Full totals breakdown, computed on demand.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let discount_amount = subtotal * self.discount_percent / 100.0;
        let after_discount = subtotal - discount_amount;
        let tax_amount = after_discount * self.tax_percent / 100.0;

        CartTotals {
            line_count: self.lines.len(),
            subtotal,
            discount_amount,
            tax_amount,
            final_total: after_discount + tax_amount,
        }
    }
}

/// Cart totals summary handed to views and to bill creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub line_count: usize,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub final_total: f64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_line_total() {
        // 800 g at 120.0 per kg
        let line = CartLine::by_weight("Apples", 120.0, 800.0);
        assert_eq!(line.total, 96.0);
        assert_eq!(line.quantity, 1);
        assert!(line.is_by_weight());
    }

    #[test]
    fn test_quantity_line_total() {
        let line = CartLine::by_quantity("Eggs", 6.5, 12);
        assert_eq!(line.total, 78.0);
        assert_eq!(line.weight_grams, 0.0);
        assert!(!line.is_by_weight());
    }

    #[test]
    fn test_line_ids_are_unique() {
        let a = CartLine::by_quantity("A", 1.0, 1);
        let b = CartLine::by_quantity("A", 1.0, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_line_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_quantity("Eggs", 6.5, 12));

        cart.remove_line("no-such-id");
        assert_eq!(cart.line_count(), 1);

        let id = cart.lines()[0].id.clone();
        cart.remove_line(&id);
        cart.remove_line(&id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_recomputes_total_in_place() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_quantity("Eggs", 6.5, 12));
        cart.add_line(CartLine::by_quantity("Bread", 30.0, 1));

        let id = cart.lines()[0].id.clone();
        cart.update_quantity(&id, 6);

        assert_eq!(cart.lines()[0].id, id); // position preserved
        assert_eq!(cart.lines()[0].quantity, 6);
        assert_eq!(cart.lines()[0].total, 39.0);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_quantity("Eggs", 6.5, 12));

        let id = cart.lines()[0].id.clone();
        cart.update_quantity(&id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_breakdown() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_quantity("A", 100.0, 2)); // 200
        cart.set_discount_percent(10.0);
        cart.set_tax_percent(5.0);

        let totals = cart.totals();
        assert_eq!(totals.subtotal, 200.0);
        assert_eq!(totals.discount_amount, 20.0);
        assert_eq!(totals.tax_amount, 9.0); // 5% of 180
        assert_eq!(totals.final_total, 189.0);
    }

    #[test]
    fn test_negative_percentages_are_clamped() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_quantity("A", 100.0, 1));
        cart.set_discount_percent(-50.0);
        cart.set_tax_percent(f64::NAN);

        assert_eq!(cart.discount_percent(), 0.0);
        assert_eq!(cart.tax_percent(), 0.0);
        assert_eq!(cart.totals().final_total, 100.0);
    }

    #[test]
    fn test_clear_resets_percentages() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_weight("Rice", 60.0, 500.0));
        cart.set_discount_percent(5.0);
        cart.set_tax_percent(12.0);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.discount_percent(), 0.0);
        assert_eq!(cart.tax_percent(), 0.0);
    }

    #[test]
    fn test_totals_are_recomputed_on_every_read() {
        let mut cart = Cart::new();
        cart.add_line(CartLine::by_quantity("A", 10.0, 1));
        assert_eq!(cart.totals().final_total, 10.0);

        cart.set_tax_percent(10.0);
        assert_eq!(cart.totals().final_total, 11.0);

        cart.add_line(CartLine::by_quantity("B", 10.0, 1));
        assert!((cart.totals().final_total - 22.0).abs() < 1e-9);
    }
}
