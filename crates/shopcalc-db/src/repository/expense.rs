//! # Expense Repository
//!
//! Database operations for expense entries.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use shopcalc_core::Expense;

/// Repository for expense database operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ExpenseRepository { pool }
    }

    /// Inserts an expense entry.
    pub async fn insert(&self, expense: &Expense) -> DbResult<()> {
        debug!(id = %expense.id, amount = %expense.amount, "Inserting expense");

        sqlx::query(
            r#"
            INSERT INTO expenses (id, created_at, description, amount, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&expense.id)
        .bind(expense.created_at)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(&expense.category)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All expenses, newest first.
    pub async fn list(&self) -> DbResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, created_at, description, amount, category
            FROM expenses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Deletes one expense. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM expenses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Sum of all expense amounts. NULL coalesces to 0.0.
    pub async fn total(&self) -> DbResult<f64> {
        let total: Option<f64> = sqlx::query_scalar("SELECT SUM(amount) FROM expenses")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.unwrap_or(0.0))
    }

    /// Sum of expense amounts at or after `since`. NULL coalesces to 0.0.
    pub async fn spent_since(&self, since: DateTime<Utc>) -> DbResult<f64> {
        let total: Option<f64> =
            sqlx::query_scalar("SELECT SUM(amount) FROM expenses WHERE created_at >= ?1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;

        Ok(total.unwrap_or(0.0))
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

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_total_and_spent_since() {
        let db = test_db().await;
        let repo = db.expenses();

        assert_eq!(repo.total().await.unwrap(), 0.0);

        let mut old = Expense::new("Rent", 5000.0, "Rent");
        old.created_at = Utc::now() - Duration::days(10);
        repo.insert(&old).await.unwrap();
        repo.insert(&Expense::new("Tea", 50.0, "Operating")).await.unwrap();

        assert_eq!(repo.total().await.unwrap(), 5050.0);
        assert_eq!(
            repo.spent_since(Utc::now() - Duration::days(1)).await.unwrap(),
            50.0
        );

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].description, "Tea"); // newest first
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.expenses();

        let expense = Expense::new("Electricity", 1200.0, "Utilities");
        repo.insert(&expense).await.unwrap();
        repo.delete(&expense.id).await.unwrap();
        repo.delete(&expense.id).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }
}
