//! # shopcalc-session: Interactive Engine Layer
//!
//! The layer a UI shell drives. One [`BillingSession`] and one
//! [`CalculatorSession`] exist per register; everything else here is
//! stateless helpers over the core and db crates.
//!
//! ## Modules
//!
//! - [`billing`] - inputs, cart, discount/tax, fire-and-forget finalize
//! - [`calculator`] - the calculator with haptic feedback attached
//! - [`catalog`] - validated product and expense writes
//! - [`dashboard`] - sales/expense aggregates per local day/week/month
//! - [`export`] - CSV report over the bill history
//! - [`change`] - change-due helpers
//! - [`haptics`] - the haptic device seam
//! - [`error`] - session error type
//!
//! ## Threading model
//!
//! Both sessions are single-mutator by construction: every method runs to
//! completion on the caller's thread in response to one discrete user
//! action. The only asynchronous boundary is storage - and the one
//! fire-and-forget point is the bill insert spawned by
//! [`BillingSession::finalize`].

pub mod billing;
pub mod calculator;
pub mod catalog;
pub mod change;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod haptics;

pub use billing::{BillingSession, FinalizeReceipt, CUSTOM_ITEM_NAME};
pub use calculator::CalculatorSession;
pub use dashboard::DashboardStats;
pub use error::{SessionError, SessionResult};
pub use haptics::{Haptics, HapticsError, NoopHaptics};
