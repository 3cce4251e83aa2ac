//! # Catalog & Expense Management
//!
//! Thin validated write paths for products and expenses. Reads go straight
//! through the repositories; these helpers exist so every write passes the
//! same business rules first.

use tracing::info;

use shopcalc_core::validation::{validate_description, validate_positive_amount, validate_product_name};
use shopcalc_core::{Expense, Product};
use shopcalc_db::Database;

use crate::error::SessionResult;

/// Creates and stores a new product.
///
/// The name must be non-blank and the price positive; a blank category
/// falls back to "General".
pub async fn add_product(
    db: &Database,
    name: &str,
    price: f64,
    category: &str,
    stock: i64,
) -> SessionResult<Product> {
    validate_product_name(name)?;
    validate_positive_amount("price", price)?;

    let product = Product::new(name, price, category, stock);
    db.products().insert(&product).await?;

    info!(id = %product.id, name = %product.name, "product added");
    Ok(product)
}

/// Flips a product's favorite flag.
pub async fn toggle_favorite(db: &Database, product: &Product) -> SessionResult<()> {
    db.products()
        .set_favorite(&product.id, !product.is_favorite)
        .await?;
    Ok(())
}

/// Records a new expense.
pub async fn add_expense(
    db: &Database,
    description: &str,
    amount: f64,
    category: &str,
) -> SessionResult<Expense> {
    validate_description(description)?;
    validate_positive_amount("amount", amount)?;

    let expense = Expense::new(description, amount, category);
    db.expenses().insert(&expense).await?;

    info!(id = %expense.id, amount = %expense.amount, "expense recorded");
    Ok(expense)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use shopcalc_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_product_validates() {
        let db = test_db().await;

        let product = add_product(&db, "Tomatoes", 40.0, "", 0).await.unwrap();
        assert_eq!(product.category, "General");

        assert!(matches!(
            add_product(&db, "  ", 40.0, "", 0).await,
            Err(SessionError::Validation(_))
        ));
        assert!(matches!(
            add_product(&db, "Free Stuff", 0.0, "", 0).await,
            Err(SessionError::Validation(_))
        ));

        assert_eq!(db.products().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_toggle_favorite_round_trip() {
        let db = test_db().await;

        let product = add_product(&db, "Apples", 180.0, "Fruits", 0).await.unwrap();
        toggle_favorite(&db, &product).await.unwrap();

        let fetched = db.products().get_by_id(&product.id).await.unwrap().unwrap();
        assert!(fetched.is_favorite);

        toggle_favorite(&db, &fetched).await.unwrap();
        let fetched = db.products().get_by_id(&product.id).await.unwrap().unwrap();
        assert!(!fetched.is_favorite);
    }

    #[tokio::test]
    async fn test_add_expense_validates() {
        let db = test_db().await;

        add_expense(&db, "Shop rent", 5000.0, "Rent").await.unwrap();
        assert!(add_expense(&db, "", 10.0, "Other").await.is_err());
        assert!(add_expense(&db, "Tea", -5.0, "Other").await.is_err());

        assert_eq!(db.expenses().total().await.unwrap(), 5000.0);
    }
}
