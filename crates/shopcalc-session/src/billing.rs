//! # Billing Session
//!
//! The active billing session: free-text price/weight/quantity inputs, the
//! cart they feed, customer details, and the finalize step that turns it
//! all into a persisted bill.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Billing Session Flow                                 │
//! │                                                                         │
//! │  type price/weight ──► preview_total() ──► shown live on home screen    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  add_to_cart() ──► CartLine appended, inputs cleared, haptic pulse      │
//! │         │              (bad input: nothing happens at all)              │
//! │         ▼                                                               │
//! │  set discount% / tax% / customer / payment method                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  finalize() ──► Bill built, insert SPAWNED on the runtime,              │
//! │         │       session cleared synchronously                           │
//! │         ▼                                                               │
//! │  FinalizeReceipt { bill, write } ── await `write` for durability        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input failure policy
//! Every text field is parsed with the silent validators from
//! `shopcalc_core::validation`: an absent, malformed, or non-positive value
//! makes the operation a no-op with the inputs left untouched. No error
//! surfaces to the user on this path.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};
use uuid::Uuid;

use shopcalc_core::cart::{Cart, CartLine, CartTotals};
use shopcalc_core::validation::{parse_percent, parse_price, parse_quantity, parse_weight_grams};
use shopcalc_core::{Bill, PaymentMethod, PricingMode, DEFAULT_CUSTOMER_NAME, GRAMS_PER_KILOGRAM};
use shopcalc_db::Database;

use crate::haptics::{Haptics, NoopHaptics};

/// Name given to lines added straight from the inputs, without a product.
pub const CUSTOM_ITEM_NAME: &str = "Custom Item";

// =============================================================================
// Finalize Receipt
// =============================================================================

/// What [`BillingSession::finalize`] hands back.
///
/// The bill itself is returned immediately; the storage write it spawned is
/// NOT awaited by the engine. Callers that need durability confirmation
/// must await [`FinalizeReceipt::write`] - when `finalize` returns, the
/// write has been *issued*, not necessarily completed.
#[derive(Debug)]
pub struct FinalizeReceipt {
    /// The bill as it was sent to storage.
    pub bill: Bill,
    /// Completion signal for the fire-and-forget insert.
    pub write: tokio::task::JoinHandle<()>,
}

// =============================================================================
// Billing Session
// =============================================================================

/// One interactive billing session.
///
/// Exactly one exists per register; all mutation happens on the caller's
/// thread in direct response to user actions, so there is no interior
/// locking here.
pub struct BillingSession {
    db: Database,
    haptics: Arc<dyn Haptics>,
    cart: Cart,
    mode: PricingMode,

    /// Price field: per kg in weight mode, per unit in quantity mode.
    pub input_price: String,
    /// Grams field (weight mode).
    pub input_weight: String,
    /// Count field (quantity mode); defaults to "1".
    pub input_quantity: String,

    /// Customer name for the next bill (blank → walk-in placeholder).
    pub customer_name: String,
    /// Customer phone for the next bill.
    pub customer_phone: String,

    payment_method: PaymentMethod,
}

impl BillingSession {
    /// Creates a session against the given database, with no haptics.
    pub fn new(db: Database) -> Self {
        BillingSession {
            db,
            haptics: Arc::new(NoopHaptics),
            cart: Cart::new(),
            mode: PricingMode::default(),
            input_price: String::new(),
            input_weight: String::new(),
            input_quantity: "1".to_string(),
            customer_name: String::new(),
            customer_phone: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Attaches a haptic device.
    pub fn with_haptics(mut self, haptics: Arc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    // -------------------------------------------------------------------------
    // Mode & inputs
    // -------------------------------------------------------------------------

    /// Current pricing mode.
    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    /// Switches pricing mode. The inputs are left as typed.
    pub fn set_mode(&mut self, mode: PricingMode) {
        self.mode = mode;
        self.pulse();
    }

    /// Clears the three input fields (the "Clear" button next to ADD).
    pub fn clear_inputs(&mut self) {
        self.input_price.clear();
        self.input_weight.clear();
        self.input_quantity = "1".to_string();
    }

    /// Live total for the current inputs, shown before anything is added.
    ///
    /// Mirrors the add rules loosely - it reads 0.0 wherever a field
    /// doesn't parse - but performs no mutation and no validation; the
    /// strict checks run in [`BillingSession::add_to_cart`].
    pub fn preview_total(&self) -> f64 {
        let price: f64 = self.input_price.trim().parse().unwrap_or(0.0);
        match self.mode {
            PricingMode::Weight => {
                let grams: f64 = self.input_weight.trim().parse().unwrap_or(0.0);
                if grams > 0.0 {
                    price * grams / GRAMS_PER_KILOGRAM
                } else {
                    0.0
                }
            }
            PricingMode::Quantity => {
                let quantity: f64 = self.input_quantity.trim().parse().unwrap_or(0.0);
                price * quantity
            }
        }
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    /// Adds a line from the current inputs.
    ///
    /// ## Behavior
    /// - price absent or <= 0 → no-op, returns false
    /// - weight/quantity absent or <= 0 (per mode) → no-op, returns false
    /// - on success: line appended with a fresh id, inputs cleared,
    ///   haptic pulse fired, returns true
    ///
    /// `product_name` is the tapped catalog product, if any; bare input
    /// adds become "Custom Item".
    pub fn add_to_cart(&mut self, product_name: Option<&str>) -> bool {
        let Some(price) = parse_price(&self.input_price) else {
            return false;
        };

        let name = product_name.unwrap_or(CUSTOM_ITEM_NAME);

        let line = match self.mode {
            PricingMode::Weight => {
                let Some(grams) = parse_weight_grams(&self.input_weight) else {
                    return false;
                };
                CartLine::by_weight(name, price, grams)
            }
            PricingMode::Quantity => {
                let Some(quantity) = parse_quantity(&self.input_quantity) else {
                    return false;
                };
                CartLine::by_quantity(name, price, quantity)
            }
        };

        debug!(name = %line.name, total = %line.total, "line added to cart");
        self.cart.add_line(line);
        self.clear_inputs();
        self.pulse();
        true
    }

    /// Removes a line by id; unknown ids are a no-op.
    pub fn remove_line(&mut self, id: &str) {
        self.cart.remove_line(id);
        self.pulse();
    }

    /// Updates a line's quantity; `quantity <= 0` removes the line.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        self.cart.update_quantity(id, quantity);
    }

    /// The active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Subtotal before discount and tax.
    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    /// Full totals breakdown for the current cart and percentages.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    // -------------------------------------------------------------------------
    // Discount, tax, payment
    // -------------------------------------------------------------------------

    /// Sets the discount percentage (negatives clamp to 0).
    pub fn set_discount_percent(&mut self, percent: f64) {
        self.cart.set_discount_percent(percent);
    }

    /// Sets the discount percentage from the text field.
    pub fn set_discount_percent_text(&mut self, input: &str) {
        self.cart.set_discount_percent(parse_percent(input));
    }

    /// Sets the tax percentage (negatives clamp to 0).
    pub fn set_tax_percent(&mut self, percent: f64) {
        self.cart.set_tax_percent(percent);
    }

    /// Sets the tax percentage from the text field.
    pub fn set_tax_percent_text(&mut self, input: &str) {
        self.cart.set_tax_percent(parse_percent(input));
    }

    /// Current payment method for the next bill.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Selects the payment method for the next bill.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Resets the session: empties the cart, zeroes discount and tax,
    /// clears the customer fields, and restores the Cash default.
    ///
    /// Persisted bills are not affected.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.customer_name.clear();
        self.customer_phone.clear();
        self.payment_method = PaymentMethod::default();
    }

    /// Finalizes the cart into a bill.
    ///
    /// ## Behavior
    /// - Empty cart → `None`, nothing changes, no write issued.
    /// - Otherwise: totals are computed, the line list is snapshotted to
    ///   JSON, a blank customer name becomes the walk-in placeholder, the
    ///   insert is **spawned** on the Tokio runtime, and the in-memory
    ///   session is cleared - after the write was issued, without waiting
    ///   for it to complete.
    ///
    /// A failed write is logged from the spawned task and otherwise
    /// dropped; awaiting [`FinalizeReceipt::write`] is the only way to
    /// sequence against it.
    ///
    /// ## Panics
    /// Must be called from within a Tokio runtime.
    pub fn finalize(&mut self) -> Option<FinalizeReceipt> {
        if self.cart.is_empty() {
            return None;
        }

        let totals = self.cart.totals();
        let items_json =
            serde_json::to_string(self.cart.lines()).unwrap_or_else(|_| "[]".to_string());

        let customer_name = self.customer_name.trim();
        let bill = Bill {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            customer_name: if customer_name.is_empty() {
                DEFAULT_CUSTOMER_NAME.to_string()
            } else {
                customer_name.to_string()
            },
            customer_phone: self.customer_phone.trim().to_string(),
            sub_total: totals.subtotal,
            discount: totals.discount_amount,
            tax: totals.tax_amount,
            final_total: totals.final_total,
            items_json,
            payment_method: self.payment_method,
        };

        let repo = self.db.bills();
        let record = bill.clone();
        let write = tokio::spawn(async move {
            if let Err(err) = repo.insert(&record).await {
                error!(bill_id = %record.id, %err, "bill write failed");
            }
        });

        // The write has been issued; the session resets without waiting
        self.clear();

        info!(bill_id = %bill.id, total = %bill.final_total, "bill finalized");
        Some(FinalizeReceipt { bill, write })
    }

    fn pulse(&self) {
        if let Err(err) = self.haptics.pulse() {
            debug!(%err, "haptic pulse failed");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
