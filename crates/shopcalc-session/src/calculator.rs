//! # Calculator Session
//!
//! Thin wrapper that pairs the pure calculator state machine with the
//! haptic seam: every keypress fires a pulse, then feeds the machine. The
//! machine itself lives in `shopcalc_core::calculator` and knows nothing
//! about devices.

use std::sync::Arc;

use tracing::debug;

use shopcalc_core::calculator::{AngleMode, Calculator, Key};

use crate::haptics::{Haptics, NoopHaptics};

/// The calculator as the keypad screens drive it.
///
/// State survives navigating between the standard and scientific screens
/// (both share this one session) and is never persisted.
pub struct CalculatorSession {
    calc: Calculator,
    haptics: Arc<dyn Haptics>,
}

impl CalculatorSession {
    /// Creates a session with no haptics.
    pub fn new() -> Self {
        CalculatorSession {
            calc: Calculator::new(),
            haptics: Arc::new(NoopHaptics),
        }
    }

    /// Attaches a haptic device.
    pub fn with_haptics(mut self, haptics: Arc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Feeds one raw keypad label, with a haptic pulse.
    ///
    /// Unknown labels still pulse (the button was pressed) but change
    /// nothing.
    pub fn press_label(&mut self, label: &str) {
        self.pulse();
        self.calc.press_label(label);
    }

    /// Feeds one classified key, with a haptic pulse.
    pub fn press(&mut self, key: Key) {
        self.pulse();
        self.calc.press(key);
    }

    /// The current display string.
    pub fn display(&self) -> &str {
        self.calc.display()
    }

    /// Current angle mode (the DEG/RAD chip).
    pub fn angle_mode(&self) -> AngleMode {
        self.calc.angle_mode()
    }

    /// Flips the DEG/RAD chip.
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.calc.toggle_angle_mode()
    }

    /// The underlying state machine (history access lives here).
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    fn pulse(&self) {
        if let Err(err) = self.haptics.pulse() {
            debug!(%err, "haptic pulse failed");
        }
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        CalculatorSession::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::HapticsError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingHaptics {
        pulses: AtomicUsize,
    }

    impl Haptics for CountingHaptics {
        fn pulse(&self) -> Result<(), HapticsError> {
            self.pulses.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_every_keypress_pulses() {
        let haptics = Arc::new(CountingHaptics::default());
        let mut session = CalculatorSession::new().with_haptics(haptics.clone());

        for label in ["7", "×", "6", "="] {
            session.press_label(label);
        }

        assert_eq!(session.display(), "42");
        assert_eq!(haptics.pulses.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_state_survives_between_screens() {
        // The scientific screen toggles the chip, the standard screen
        // keeps typing; both share one session
        let mut session = CalculatorSession::new();
        session.press_label("4");
        assert_eq!(session.toggle_angle_mode(), AngleMode::Radians);
        session.press_label("5");

        assert_eq!(session.display(), "45");
        assert_eq!(session.angle_mode(), AngleMode::Radians);
    }
}
