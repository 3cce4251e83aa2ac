//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! The catalog backs the quick-pick tiles and the price-prefill picker, so
//! the default ordering puts favorites first, then sorts by name - the
//! same order the home screen shows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopcalc_core::Product;

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products, favorites first, then by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, is_favorite, category, stock, barcode
            FROM products
            ORDER BY is_favorite DESC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Lists products in one category, by name.
    pub async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, is_favorite, category, stock, barcode
            FROM products
            WHERE category = ?1
            ORDER BY name ASC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, is_favorite, category, stock, barcode
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a product, replacing any existing row with the same id.
    ///
    /// Upsert semantics keep "save edited product" a single call.
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO products
                (id, name, price, is_favorite, category, stock, barcode)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.is_favorite)
        .bind(&product.category)
        .bind(product.stock)
        .bind(&product.barcode)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates an existing product in place.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                is_favorite = ?4,
                category = ?5,
                stock = ?6,
                barcode = ?7
            WHERE id = ?1
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.is_favorite)
        .bind(&product.category)
        .bind(product.stock)
        .bind(&product.barcode)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        Ok(())
    }

    /// Flips the favorite flag on a product.
    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> DbResult<()> {
        let result = sqlx::query("UPDATE products SET is_favorite = ?2 WHERE id = ?1")
            .bind(id)
            .bind(is_favorite)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Distinct non-empty categories, for the filter chips.
    pub async fn categories(&self) -> DbResult<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT category
            FROM products
            WHERE category != ''
            ORDER BY category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Number of products in the catalog.
    pub async fn count(&self) -> DbResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
