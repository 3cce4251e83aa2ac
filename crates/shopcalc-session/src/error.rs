//! # Session Error Type
//!
//! Unified error type for session operations that touch both validation
//! and storage. The billing inputs and the calculator deliberately bypass
//! this: their failure mode is "nothing happens", not an error value.

use thiserror::Error;

use shopcalc_core::ValidationError;
use shopcalc_db::DbError;

/// Error returned by catalog and expense management operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input failed a business rule check.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage layer failed.
    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
