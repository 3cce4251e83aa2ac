//! # Change Calculator
//!
//! Pure helpers behind the change-return screen: how much to hand back
//! given the bill amount and what the customer tendered.

use shopcalc_core::validation::parse_amount;

/// Quick tender buttons, in display order.
pub const QUICK_TENDER_AMOUNTS: [i64; 6] = [100, 200, 500, 1000, 2000, 5000];

/// Change due to the customer.
///
/// Negative means the tender was short and more payment is needed.
pub fn change_due(bill_amount: f64, tendered: f64) -> f64 {
    tendered - bill_amount
}

/// Change due from the two text fields.
///
/// `None` until both fields hold a positive amount - the screen shows no
/// result card before then.
pub fn change_due_text(bill_input: &str, tendered_input: &str) -> Option<f64> {
    let bill = parse_amount(bill_input)?;
    let tendered = parse_amount(tendered_input)?;
    Some(change_due(bill, tendered))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_due_signs() {
        assert_eq!(change_due(370.0, 500.0), 130.0);
        assert_eq!(change_due(500.0, 500.0), 0.0);
        assert_eq!(change_due(500.0, 200.0), -300.0); // short: collect more
    }

    #[test]
    fn test_change_due_text() {
        assert_eq!(change_due_text("370", "500"), Some(130.0));
        assert_eq!(change_due_text("", "500"), None);
        assert_eq!(change_due_text("370", "abc"), None);
        assert_eq!(change_due_text("0", "500"), None);
    }
}
