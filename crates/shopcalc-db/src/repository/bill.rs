//! # Bill Repository
//!
//! Database operations for finalized bills.
//!
//! ## Bill Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bill Lifecycle                                    │
//! │                                                                         │
//! │  1. INSERT                                                              │
//! │     └── finalize() on the billing session builds the Bill and           │
//! │         issues insert() fire-and-forget                                 │
//! │                                                                         │
//! │  2. READ                                                                │
//! │     └── list() / list_between() for the history screen                  │
//! │     └── sales_since() / count_since() for the dashboard                 │
//! │                                                                         │
//! │  3. DELETE                                                              │
//! │     └── delete() per row, delete_all() from settings                    │
//! │                                                                         │
//! │  There is NO update path. Bills are immutable once written.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use shopcalc_core::{Bill, PaymentMethod};

/// Repository for bill database operations.
#[derive(Debug, Clone)]
pub struct BillRepository {
    pool: SqlitePool,
}

impl BillRepository {
    /// Creates a new BillRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BillRepository { pool }
    }

    /// Inserts a finalized bill.
    pub async fn insert(&self, bill: &Bill) -> DbResult<()> {
        debug!(id = %bill.id, total = %bill.final_total, "Inserting bill");

        sqlx::query(
            r#"
            INSERT INTO bills (
                id, created_at, customer_name, customer_phone,
                sub_total, discount, tax, final_total,
                items_json, payment_method
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&bill.id)
        .bind(bill.created_at)
        .bind(&bill.customer_name)
        .bind(&bill.customer_phone)
        .bind(bill.sub_total)
        .bind(bill.discount)
        .bind(bill.tax)
        .bind(bill.final_total)
        .bind(&bill.items_json)
        .bind(bill.payment_method)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All bills, newest first.
    pub async fn list(&self) -> DbResult<Vec<Bill>> {
        let bills = sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, created_at, customer_name, customer_phone,
                   sub_total, discount, tax, final_total,
                   items_json, payment_method
            FROM bills
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bills)
    }

    /// Bills within a timestamp range (inclusive), newest first.
    pub async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbResult<Vec<Bill>> {
        let bills = sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, created_at, customer_name, customer_phone,
                   sub_total, discount, tax, final_total,
                   items_json, payment_method
            FROM bills
            WHERE created_at >= ?1 AND created_at <= ?2
            ORDER BY created_at DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(bills)
    }

    /// Deletes one bill. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting bill");

        sqlx::query("DELETE FROM bills WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes every bill. Products and expenses are untouched.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM bills").execute(&self.pool).await?;

        debug!(deleted = result.rows_affected(), "Deleted all bills");
        Ok(result.rows_affected())
    }

    /// Sum of final totals for bills at or after `since`.
    ///
    /// NULL (no matching rows) coalesces to 0.0.
    pub async fn sales_since(&self, since: DateTime<Utc>) -> DbResult<f64> {
        let total: Option<f64> =
            sqlx::query_scalar("SELECT SUM(final_total) FROM bills WHERE created_at >= ?1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;

        Ok(total.unwrap_or(0.0))
    }

    /// Number of bills at or after `since`.
    pub async fn count_since(&self, since: DateTime<Utc>) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bills WHERE created_at >= ?1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Revenue grouped by payment method, biggest first.
    pub async fn revenue_by_payment_method(&self) -> DbResult<Vec<(PaymentMethod, f64)>> {
        let rows = sqlx::query_as::<_, (PaymentMethod, f64)>(
            r#"
            SELECT payment_method, SUM(final_total)
            FROM bills
            GROUP BY payment_method
            ORDER BY SUM(final_total) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Duration;
    use uuid::Uuid;

    fn bill_at(created_at: DateTime<Utc>, total: f64, method: PaymentMethod) -> Bill {
        Bill {
            id: Uuid::new_v4().to_string(),
            created_at,
            customer_name: "Walk-in".to_string(),
            customer_phone: String::new(),
            sub_total: total,
            discount: 0.0,
            tax: 0.0,
            final_total: total,
            items_json: "[]".to_string(),
            payment_method: method,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_newest_first() {
        let db = test_db().await;
        let repo = db.bills();
        let now = Utc::now();

        repo.insert(&bill_at(now - Duration::hours(2), 100.0, PaymentMethod::Cash))
            .await
            .unwrap();
        repo.insert(&bill_at(now, 250.0, PaymentMethod::Upi))
            .await
            .unwrap();

        let bills = repo.list().await.unwrap();
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].final_total, 250.0);
        assert_eq!(bills[0].payment_method, PaymentMethod::Upi);
    }

    #[tokio::test]
    async fn test_aggregates_honor_threshold_and_null_coalescing() {
        let db = test_db().await;
        let repo = db.bills();
        let now = Utc::now();

        // Empty table: sums coalesce to zero
        assert_eq!(repo.sales_since(now - Duration::days(1)).await.unwrap(), 0.0);
        assert_eq!(repo.count_since(now - Duration::days(1)).await.unwrap(), 0);

        repo.insert(&bill_at(now - Duration::days(3), 500.0, PaymentMethod::Cash))
            .await
            .unwrap();
        repo.insert(&bill_at(now - Duration::hours(1), 120.0, PaymentMethod::Cash))
            .await
            .unwrap();
        repo.insert(&bill_at(now, 80.0, PaymentMethod::Card))
            .await
            .unwrap();

        let since = now - Duration::days(1);
        assert_eq!(repo.sales_since(since).await.unwrap(), 200.0);
        assert_eq!(repo.count_since(since).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_revenue_by_payment_method() {
        let db = test_db().await;
        let repo = db.bills();
        let now = Utc::now();

        repo.insert(&bill_at(now, 100.0, PaymentMethod::Cash)).await.unwrap();
        repo.insert(&bill_at(now, 50.0, PaymentMethod::Cash)).await.unwrap();
        repo.insert(&bill_at(now, 60.0, PaymentMethod::Upi)).await.unwrap();

        let breakdown = repo.revenue_by_payment_method().await.unwrap();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0], (PaymentMethod::Cash, 150.0));
        assert_eq!(breakdown[1], (PaymentMethod::Upi, 60.0));
    }

    #[tokio::test]
    async fn test_delete_and_delete_all() {
        let db = test_db().await;
        let repo = db.bills();
        let now = Utc::now();

        let bill = bill_at(now, 100.0, PaymentMethod::Cash);
        repo.insert(&bill).await.unwrap();
        repo.insert(&bill_at(now, 40.0, PaymentMethod::Other)).await.unwrap();

        repo.delete(&bill.id).await.unwrap();
        repo.delete(&bill.id).await.unwrap(); // idempotent
        assert_eq!(repo.list().await.unwrap().len(), 1);

        let deleted = repo.delete_all().await.unwrap();
        assert_eq!(deleted, 1);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
