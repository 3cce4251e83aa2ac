//! # shopcalc-core: Pure Business Logic for ShopCalc
//!
//! This crate is the **heart** of ShopCalc. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopCalc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (out of scope)                      │   │
//! │  │    Price/Weight Inputs ──► Cart View ──► Calculator Keypad      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopcalc-session                             │   │
//! │  │    BillingSession, CalculatorSession, export, dashboard         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcalc-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ calculator │  │ validation│  │   │
//! │  │   │  Product  │  │   Cart    │  │  Key/state │  │   rules   │  │   │
//! │  │   │   Bill    │  │ CartLine  │  │  formatting│  │  parsers  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopcalc-db (Database Layer)                 │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Bill, Expense, PaymentMethod, ...)
//! - [`cart`] - Cart lines and the discount/tax totals breakdown
//! - [`calculator`] - The keypad-driven calculator state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Silent validation on the billing path**: malformed user input is a
//!    no-op, never a panic and never a surfaced error
//! 4. **The calculator never fails**: any arithmetic fault degrades to the
//!    `"Error"` display sentinel
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcalc_core::cart::{Cart, CartLine};
//! use shopcalc_core::calculator::Calculator;
//!
//! // Price 800 g of apples at 120.0 per kilogram
//! let mut cart = Cart::new();
//! cart.add_line(CartLine::by_weight("Apples", 120.0, 800.0));
//! assert_eq!(cart.subtotal(), 96.0);
//!
//! // Drive the calculator with keypad labels
//! let mut calc = Calculator::new();
//! for key in ["2", "+", "3", "="] {
//!     calc.press_label(key);
//! }
//! assert_eq!(calc.display(), "5");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopcalc_core::Cart` instead of
// `use shopcalc_core::cart::Cart`

pub use calculator::{AngleMode, Calculator, Key};
pub use cart::{Cart, CartLine, CartTotals};
pub use error::{ValidationError, ValidationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of the calculator display during digit entry.
///
/// ## Business Reason
/// Keeps the display readable on a phone-sized screen. Computed results
/// that exceed this fall back to scientific notation instead; the π and e
/// constants are inserted at full precision and intentionally bypass it.
pub const MAX_DISPLAY_LEN: usize = 12;

/// Maximum number of entries kept in the calculator history.
///
/// Newest first; the oldest entry is dropped on overflow.
pub const HISTORY_CAP: usize = 20;

/// Customer name recorded on a bill when none was entered.
pub const DEFAULT_CUSTOMER_NAME: &str = "Walk-in";

/// Category assigned to products created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Grams in one kilogram, the unit prices are quoted against.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
