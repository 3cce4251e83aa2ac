//! # Repository Module
//!
//! Repository implementations for database entities.
//!
//! ## Repository Pattern
//! Each repository owns the SQL for one table and exposes typed methods.
//! Repositories are cheap to create (they clone the pool handle) and are
//! obtained from [`crate::Database`]:
//!
//! ```rust,ignore
//! let products = db.products().list().await?;
//! let today = db.bills().sales_since(start_of_day).await?;
//! db.expenses().insert(&expense).await?;
//! ```

pub mod bill;
pub mod expense;
pub mod product;
