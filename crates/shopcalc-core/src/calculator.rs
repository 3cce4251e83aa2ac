//! # Calculator Module
//!
//! The keypad-driven calculator: a small state machine fed one button
//! token at a time, covering the standard keypad and the scientific panel.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Calculator State                                    │
//! │                                                                         │
//! │  display: "42.5"          what the user sees                            │
//! │  pending: Some(Pending { operand: 7.0, op: Add })                       │
//! │           └── operand and operator live or die together; an             │
//! │               operator without its left-hand side cannot exist          │
//! │  replace_on_entry: bool   next digit starts a fresh number              │
//! │  history: ["7 + 35.5 = 42.5", ...]   newest first, capped at 20         │
//! │  angle_mode: Degrees | Radians       trig input interpretation          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! There is no error type here. Unparsable input makes a token a no-op;
//! non-finite arithmetic (divide by zero, ln of zero, overflow) puts the
//! `"Error"` sentinel on the display. No token handler can panic.

use std::collections::VecDeque;
use std::f64::consts::{E, PI};

use serde::{Deserialize, Serialize};

use crate::{HISTORY_CAP, MAX_DISPLAY_LEN};

/// Display sentinel for non-finite results.
pub const ERROR_DISPLAY: &str = "Error";

// =============================================================================
// Key Tokens
// =============================================================================

/// A binary operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// The keypad glyph, also used in history entries.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Power => "^",
        }
    }

    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            // Division by zero yields NaN here so every non-finite result
            // funnels into the same "Error" path at the call site
            BinaryOp::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
            BinaryOp::Power => lhs.powf(rhs),
        }
    }
}

/// A unary function from the scientific panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Ln,
    Log10,
    Square,
    Reciprocal,
}

/// One button press, already classified.
///
/// UI layers usually go through [`Calculator::press_label`] with the raw
/// keypad label instead of constructing these directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Digit(char),
    Decimal,
    Op(BinaryOp),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Percent,
    Unary(UnaryFn),
    Pi,
    Euler,
}

impl Key {
    /// Maps a keypad label to a key. Unknown labels map to `None`.
    pub fn parse(label: &str) -> Option<Key> {
        let key = match label {
            "C" => Key::Clear,
            "⌫" => Key::Backspace,
            "+" => Key::Op(BinaryOp::Add),
            "-" | "−" => Key::Op(BinaryOp::Subtract),
            "×" | "*" => Key::Op(BinaryOp::Multiply),
            "÷" | "/" => Key::Op(BinaryOp::Divide),
            "^" => Key::Op(BinaryOp::Power),
            "=" => Key::Equals,
            "." => Key::Decimal,
            "±" => Key::ToggleSign,
            "%" => Key::Percent,
            "sin" => Key::Unary(UnaryFn::Sin),
            "cos" => Key::Unary(UnaryFn::Cos),
            "tan" => Key::Unary(UnaryFn::Tan),
            "√" => Key::Unary(UnaryFn::Sqrt),
            "ln" => Key::Unary(UnaryFn::Ln),
            "log" => Key::Unary(UnaryFn::Log10),
            "x²" => Key::Unary(UnaryFn::Square),
            "1/x" => Key::Unary(UnaryFn::Reciprocal),
            "π" => Key::Pi,
            "e" => Key::Euler,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(digit), None) if digit.is_ascii_digit() => Key::Digit(digit),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

// =============================================================================
// Angle Mode
// =============================================================================

/// How trig functions interpret the display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// The mode chip label ("DEG" / "RAD").
    pub const fn label(&self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// A captured left-hand operand together with its operator.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    operand: f64,
    op: BinaryOp,
}

/// The calculator state machine.
///
/// Lives for the whole app session, survives screen navigation, and is
/// never persisted. `C` resets the arithmetic state but keeps the history
/// and the angle mode.
///
/// ## Example
/// ```rust
/// use shopcalc_core::calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// for key in ["1", "2", "×", "3", "="] {
///     calc.press_label(key);
/// }
/// assert_eq!(calc.display(), "36");
/// assert_eq!(calc.history().front().map(String::as_str), Some("12 × 3 = 36"));
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    pending: Option<Pending>,
    replace_on_entry: bool,
    history: VecDeque<String>,
    angle_mode: AngleMode,
}

impl Calculator {
    /// Creates a calculator showing "0" in degree mode.
    pub fn new() -> Self {
        Calculator {
            display: "0".to_string(),
            pending: None,
            replace_on_entry: false,
            history: VecDeque::new(),
            angle_mode: AngleMode::default(),
        }
    }

    /// The current display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Completed calculations, newest first.
    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    /// The current angle mode.
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Sets the angle mode (affects only sin/cos/tan).
    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    /// Flips between degree and radian mode, returning the new mode.
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.angle_mode = match self.angle_mode {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        };
        self.angle_mode
    }

    /// Feeds one raw keypad label. Unrecognized labels are a no-op.
    pub fn press_label(&mut self, label: &str) {
        if let Some(key) = Key::parse(label) {
            self.press(key);
        }
    }

    /// Feeds one classified key.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.enter_char(digit),
            Key::Decimal => self.enter_char('.'),

            Key::Op(op) => {
                // An unparsable display (e.g. "Error") clears the pending
                // slot entirely, which in turn makes "=" a no-op
                self.pending = self
                    .display
                    .parse::<f64>()
                    .ok()
                    .map(|operand| Pending { operand, op });
                self.replace_on_entry = true;
            }

            Key::Equals => self.evaluate(),

            Key::Clear => {
                self.display = "0".to_string();
                self.pending = None;
                self.replace_on_entry = false;
            }

            Key::Backspace => {
                self.display.pop();
                if self.display.is_empty() {
                    self.display = "0".to_string();
                }
            }

            Key::ToggleSign => {
                if let Ok(value) = self.display.parse::<f64>() {
                    self.display = format_result(-value);
                }
            }

            Key::Percent => {
                if let Ok(value) = self.display.parse::<f64>() {
                    self.display = format_result(value / 100.0);
                }
            }

            Key::Unary(function) => self.apply_unary(function),

            Key::Pi => self.display = PI.to_string(),
            Key::Euler => self.display = E.to_string(),
        }
    }

    /// Digit or decimal-point entry.
    fn enter_char(&mut self, c: char) {
        if self.replace_on_entry || self.display == "0" || self.display == ERROR_DISPLAY {
            self.display = c.to_string();
            self.replace_on_entry = false;
            return;
        }

        if c == '.' && self.display.contains('.') {
            return;
        }

        if self.display.len() < MAX_DISPLAY_LEN {
            self.display.push(c);
        }
    }

    /// Handles "=": evaluate the pending binary expression, if complete.
    fn evaluate(&mut self) {
        let Ok(rhs) = self.display.parse::<f64>() else {
            return;
        };
        let Some(Pending { operand, op }) = self.pending.take() else {
            return;
        };

        let result = op.apply(operand, rhs);
        if result.is_finite() {
            let formatted = format_result(result);
            self.push_history(format!(
                "{} {} {} = {}",
                format_result(operand),
                op.symbol(),
                format_result(rhs),
                formatted
            ));
            self.display = formatted;
        } else {
            self.display = ERROR_DISPLAY.to_string();
        }
    }

    fn apply_unary(&mut self, function: UnaryFn) {
        let Ok(value) = self.display.parse::<f64>() else {
            return;
        };

        let result = match function {
            UnaryFn::Sin => self.to_radians(value).sin(),
            UnaryFn::Cos => self.to_radians(value).cos(),
            UnaryFn::Tan => self.to_radians(value).tan(),
            UnaryFn::Sqrt => value.sqrt(),
            UnaryFn::Ln => value.ln(),
            UnaryFn::Log10 => value.log10(),
            UnaryFn::Square => value * value,
            UnaryFn::Reciprocal => 1.0 / value,
        };

        self.display = if result.is_finite() {
            format_result(result)
        } else {
            ERROR_DISPLAY.to_string()
        };
    }

    fn to_radians(&self, value: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Radians => value,
            AngleMode::Degrees => value.to_radians(),
        }
    }

    fn push_history(&mut self, entry: String) {
        self.history.push_front(entry);
        self.history.truncate(HISTORY_CAP);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

// =============================================================================
// Result Formatting
// =============================================================================

/// Formats a computed value for the display.
///
/// ## Rules, in order
/// 1. Non-finite → `"Error"`
/// 2. Whole number below 1e10 in magnitude → integer string
/// 3. Nonzero magnitude below 1e-4 → scientific, 2 fractional digits
/// 4. Otherwise 8 fractional digits with trailing zeros (and a trailing
///    point) stripped; if that still exceeds 12 characters, scientific
///    with 2 fractional digits
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e10 {
        return format!("{}", value as i64);
    }

    if value.abs() < 1e-4 {
        return format!("{:.2e}", value);
    }

    let fixed = format!("{:.8}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.len() > MAX_DISPLAY_LEN {
        format!("{:.2e}", value)
    } else {
        trimmed.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            calc.press_label(label);
        }
    }

    #[test]
    fn test_addition_with_history() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "="]);

        assert_eq!(calc.display(), "5");
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history()[0], "2 + 3 = 5");
    }

    #[test]
    fn test_divide_by_zero_shows_error_sentinel() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "÷", "0", "="]);

        assert_eq!(calc.display(), "Error");
        assert!(calc.history().is_empty());

        // Pending state was cleared: a lone "=" afterwards changes nothing
        calc.press_label("=");
        assert_eq!(calc.display(), "Error");

        // And the machine recovers as soon as a digit is typed
        calc.press_label("7");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_digit_entry_caps_at_twelve_chars() {
        let mut calc = Calculator::new();
        press_all(
            &mut calc,
            &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "3"],
        );

        assert_eq!(calc.display(), "123456789012");
        assert_eq!(calc.display().len(), 12);
    }

    #[test]
    fn test_decimal_point_rules() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", ".", "5", ".", "5"]);
        assert_eq!(calc.display(), "1.55"); // second point ignored
    }

    #[test]
    fn test_operator_captures_operand_and_resets_entry() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "×", "4"]);
        assert_eq!(calc.display(), "4");

        calc.press_label("=");
        assert_eq!(calc.display(), "36");
    }

    #[test]
    fn test_chained_operator_replaces_pending() {
        // The second operator re-captures the display; nothing evaluates
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3", "-", "2", "="]);
        assert_eq!(calc.display(), "1"); // 3 - 2
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "2", "="]);
        assert_eq!(calc.display(), "42");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_clear_resets_state_but_keeps_history() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "3", "=", "C"]);

        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "3", "⌫"]);
        assert_eq!(calc.display(), "12");

        press_all(&mut calc, &["⌫", "⌫"]);
        assert_eq!(calc.display(), "0");

        calc.press_label("⌫");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_sign_toggle_and_percent() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "0", "±"]);
        assert_eq!(calc.display(), "-50");

        calc.press_label("%");
        assert_eq!(calc.display(), "-0.5");
    }

    #[test]
    fn test_power_operator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "^", "1", "0", "="]);
        assert_eq!(calc.display(), "1024");
    }

    #[test]
    fn test_sin_in_degree_mode() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "0", "sin"]);
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_sin_of_pi_over_two_in_radian_mode() {
        let mut calc = Calculator::new();
        calc.set_angle_mode(AngleMode::Radians);

        // π, then halve it, then sin
        press_all(&mut calc, &["π", "÷", "2", "=", "sin"]);
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_scientific_error_cases() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "±", "√"]);
        assert_eq!(calc.display(), "Error"); // sqrt(-1)

        press_all(&mut calc, &["0", "ln"]);
        assert_eq!(calc.display(), "Error"); // ln(0) = -inf

        press_all(&mut calc, &["0", "1/x"]);
        assert_eq!(calc.display(), "Error"); // 1/0 = inf
    }

    #[test]
    fn test_square_and_reciprocal() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "x²"]);
        assert_eq!(calc.display(), "144");

        press_all(&mut calc, &["C", "8", "1/x"]);
        assert_eq!(calc.display(), "0.125");
    }

    #[test]
    fn test_constants_full_precision() {
        let mut calc = Calculator::new();
        calc.press_label("π");
        assert_eq!(calc.display(), "3.141592653589793");

        calc.press_label("e");
        assert_eq!(calc.display(), "2.718281828459045");
    }

    #[test]
    fn test_unknown_label_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "??", "what", ""]);
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_history_is_capped_newest_first() {
        let mut calc = Calculator::new();
        for i in 0..25 {
            press_all(&mut calc, &["C", "1", "+"]);
            // type the loop counter digit by digit
            for digit in i.to_string().chars() {
                calc.press_label(&digit.to_string());
            }
            calc.press_label("=");
        }

        assert_eq!(calc.history().len(), HISTORY_CAP);
        assert_eq!(calc.history()[0], "1 + 24 = 25");
        assert_eq!(calc.history()[HISTORY_CAP - 1], "1 + 5 = 6");
    }

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_result(3.0), "3");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn test_format_tiny_values_go_scientific() {
        assert_eq!(format_result(0.00001234), "1.23e-5");
        assert_eq!(format_result(-0.00005), "-5.00e-5");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_result(1.0 / 3.0), "0.33333333");
        assert_eq!(format_result(0.125), "0.125");
        assert_eq!(format_result(2.5), "2.5");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_result(f64::NAN), "Error");
        assert_eq!(format_result(f64::INFINITY), "Error");
    }

    #[test]
    fn test_format_long_fixed_falls_back_to_scientific() {
        // 123456789.123456 renders as 13+ fixed chars, so it goes scientific
        let formatted = format_result(123_456_789.123_456);
        assert_eq!(formatted, "1.23e8");
    }
}
