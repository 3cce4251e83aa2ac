//! # Dashboard Statistics
//!
//! The figures the dashboard and analytics screens show: sales for today /
//! this week / this month, today's bill count and expenses, net profit,
//! and the revenue split by payment method.
//!
//! Period thresholds follow the shopkeeper's local calendar: "today"
//! starts at local midnight, the week on Monday, the month on the 1st.
//! Every aggregate is a single SQL SUM/COUNT with NULL coalesced to zero.

use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use shopcalc_core::PaymentMethod;
use shopcalc_db::{Database, DbResult};

// =============================================================================
// Period Thresholds
// =============================================================================

/// Start of the current local day, as a UTC instant.
pub fn start_of_today() -> DateTime<Utc> {
    local_midnight(Local::now().date_naive())
}

/// Start of the current local week (Monday), as a UTC instant.
pub fn start_of_week() -> DateTime<Utc> {
    let today = Local::now().date_naive();
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    local_midnight(monday)
}

/// Start of the current local month, as a UTC instant.
pub fn start_of_month() -> DateTime<Utc> {
    let today = Local::now().date_naive();
    local_midnight(today.with_day(1).unwrap_or(today))
}

fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => instant.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Midnight swallowed by a DST gap; read the naive time as UTC
        LocalResult::None => midnight.and_utc(),
    }
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// One loaded snapshot of the dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today_sales: f64,
    pub weekly_sales: f64,
    pub monthly_sales: f64,
    pub today_bill_count: i64,
    pub today_expenses: f64,
    /// Today's revenue minus today's expenses.
    pub net_profit: f64,
}

impl DashboardStats {
    /// Loads all figures from storage.
    pub async fn load(db: &Database) -> DbResult<Self> {
        let today = start_of_today();

        let today_sales = db.bills().sales_since(today).await?;
        let weekly_sales = db.bills().sales_since(start_of_week()).await?;
        let monthly_sales = db.bills().sales_since(start_of_month()).await?;
        let today_bill_count = db.bills().count_since(today).await?;
        let today_expenses = db.expenses().spent_since(today).await?;

        Ok(DashboardStats {
            today_sales,
            weekly_sales,
            monthly_sales,
            today_bill_count,
            today_expenses,
            net_profit: today_sales - today_expenses,
        })
    }
}

/// Revenue grouped by payment method, biggest first.
pub async fn payment_breakdown(db: &Database) -> DbResult<Vec<(PaymentMethod, f64)>> {
    db.bills().revenue_by_payment_method().await
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_ordered() {
        let now = Utc::now();
        let today = start_of_today();
        let week = start_of_week();
        let month = start_of_month();

        assert!(today <= now);
        assert!(week <= today);
        assert!(month <= today);
        // Neither week nor month start reaches further back than 31 days
        assert!(now - week < Duration::days(8));
        assert!(now - month < Duration::days(32));
    }
}
