//! # Haptics Seam
//!
//! The billing and calculator sessions fire a short haptic pulse on
//! successful interactions. The actual vibration device lives with the UI
//! shell, behind this trait; the engine only ever *requests* a pulse and
//! swallows any failure, so a missing or broken vibrator can never affect
//! session state.

use thiserror::Error;

/// Failure reported by a haptic device.
///
/// Callers inside this crate log it at debug level and move on.
#[derive(Debug, Error)]
#[error("haptic device unavailable: {0}")]
pub struct HapticsError(pub String);

/// A device that can produce a short feedback pulse.
pub trait Haptics: Send + Sync {
    /// Fires one short pulse.
    fn pulse(&self) -> Result<(), HapticsError>;
}

/// Default device: does nothing, never fails.
///
/// Used in tests and on hosts without a vibrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn pulse(&self) -> Result<(), HapticsError> {
        Ok(())
    }
}
