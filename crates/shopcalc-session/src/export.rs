//! # CSV Export
//!
//! Turns the bill history into the comma-separated report handed to the
//! share sheet. The sharing mechanism itself is the UI shell's problem;
//! this module only produces the text.

use chrono::Local;

use shopcalc_core::Bill;

/// Column header, first line of every export.
pub const CSV_HEADER: &str = "Date,Customer,Phone,Subtotal,Discount,Tax,Total,Payment";

/// Date layout used in the report, e.g. `07 Aug, 01:45 PM`.
const DATE_FORMAT: &str = "%d %b, %I:%M %p";

/// Renders the full bill list as CSV text, newest-first if the input is.
///
/// Amounts are written raw (unrounded) and fields are not quoted; the
/// report is meant for spreadsheets fed by this app's own data.
pub fn bills_to_csv(bills: &[Bill]) -> String {
    let mut lines = Vec::with_capacity(bills.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for bill in bills {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            bill.created_at.with_timezone(&Local).format(DATE_FORMAT),
            bill.customer_name,
            bill.customer_phone,
            bill.sub_total,
            bill.discount,
            bill.tax,
            bill.final_total,
            bill.payment_method,
        ));
    }

    lines.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shopcalc_core::PaymentMethod;

    fn sample_bill(customer: &str, total: f64) -> Bill {
        Bill {
            id: "b1".to_string(),
            created_at: Utc::now(),
            customer_name: customer.to_string(),
            customer_phone: "9876543210".to_string(),
            sub_total: total,
            discount: 0.0,
            tax: 0.0,
            final_total: total,
            items_json: "[]".to_string(),
            payment_method: PaymentMethod::Upi,
        }
    }

    #[test]
    fn test_empty_export_is_just_the_header() {
        assert_eq!(bills_to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_one_row_per_bill() {
        let csv = bills_to_csv(&[sample_bill("Asha", 250.0), sample_bill("Ravi", 80.5)]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].contains("Asha"));
        assert!(lines[1].contains("250"));
        assert!(lines[1].ends_with("UPI"));
        assert!(lines[2].contains("Ravi"));
        assert!(lines[2].contains("80.5"));
    }

    #[test]
    fn test_date_column_uses_short_month_format() {
        let csv = bills_to_csv(&[sample_bill("Asha", 100.0)]);
        let row = csv.lines().nth(1).unwrap();

        // "07 Aug, 01:45 PM" - fixed 16-char layout, half-day suffix last
        let date_field = &row[..16];
        assert!(date_field.ends_with("AM") || date_field.ends_with("PM"));
    }
}
