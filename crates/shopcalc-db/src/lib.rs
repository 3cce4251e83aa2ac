//! # shopcalc-db: Database Layer for ShopCalc
//!
//! This crate provides database access for ShopCalc.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, bill, expense)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopcalc_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/shop.db")).await?;
//!
//! // Use repositories
//! let products = db.products().list().await?;
//! let today = db.bills().sales_since(start_of_day).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::bill::BillRepository;
pub use repository::expense::ExpenseRepository;
pub use repository::product::ProductRepository;
