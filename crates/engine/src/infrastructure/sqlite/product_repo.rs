//! Product repository implementation for SQLite.
//!
//! Also home of the top-stock aggregation: one row per branch of a
//! franchise, carrying that branch's highest-stock product.

use std::sync::Arc;

use async_trait::async_trait;
use franchise_domain::{FranchiseId, NewProduct, Product, ProductId, TopStockProduct};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{map_sqlx_err, parse_id, parse_timestamp};
use crate::infrastructure::ports::{ClockPort, ProductRepo, RepoError};

pub struct SqliteProductRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteProductRepo {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self { pool, clock }
    }
}

fn row_to_product(row: &SqliteRow) -> Result<Product, RepoError> {
    Ok(Product {
        id: parse_id(row.get::<&str, _>("id"))?,
        branch_id: parse_id(row.get::<&str, _>("branch_id"))?,
        name: row.get("name"),
        stock: row.get("stock"),
        created_at: parse_timestamp(row.get::<&str, _>("created_at"))?,
        updated_at: parse_timestamp(row.get::<&str, _>("updated_at"))?,
    })
}

fn row_to_top_stock(row: &SqliteRow) -> Result<TopStockProduct, RepoError> {
    Ok(TopStockProduct {
        branch_id: parse_id(row.get::<&str, _>("branch_id"))?,
        branch_name: row.get("branch_name"),
        product_name: row.get("product_name"),
        stock: row.get("stock"),
    })
}

#[async_trait]
impl ProductRepo for SqliteProductRepo {
    async fn save(&self, product: &NewProduct) -> Result<Product, RepoError> {
        // The CHECK constraint would catch this too; validating here keeps
        // the message stable instead of leaking SQLite's wording.
        product
            .validate_stock()
            .map_err(|e| RepoError::invalid_input(e))?;

        let id = ProductId::new();
        let now = self.clock.now();

        sqlx::query(
            r#"
            INSERT INTO products (id, branch_id, name, stock, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(product.branch_id.to_string())
        .bind(&product.name)
        .bind(product.stock)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("product.save", e))?;

        tracing::debug!(product_id = %id, "Inserted product: {}", product.name);
        Ok(Product {
            id,
            branch_id: product.branch_id,
            name: product.name.clone(),
            stock: product.stock,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        let row = sqlx::query("SELECT * FROM products WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("product.find_by_id", e))?;

        row.as_ref().map(row_to_product).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepoError> {
        let row = sqlx::query("SELECT * FROM products WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("product.find_by_name", e))?;

        row.as_ref().map(row_to_product).transpose()
    }

    async fn update_name(&self, id: ProductId, name: &str) -> Result<Option<Product>, RepoError> {
        let result = sqlx::query("UPDATE products SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(self.clock.now().to_rfc3339())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("product.update_name", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn update_stock(&self, id: ProductId, stock: i32) -> Result<Option<Product>, RepoError> {
        let result = sqlx::query("UPDATE products SET stock = ?, updated_at = ? WHERE id = ?")
            .bind(stock)
            .bind(self.clock.now().to_rfc3339())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("product.update_stock", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("product.delete_by_id", e))?;

        tracing::debug!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn find_top_stock_by_franchise(
        &self,
        franchise_id: FranchiseId,
    ) -> Result<Vec<TopStockProduct>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT branch_id, branch_name, product_name, stock FROM (
                SELECT
                    p.branch_id AS branch_id,
                    b.name AS branch_name,
                    p.name AS product_name,
                    p.stock AS stock,
                    ROW_NUMBER() OVER (
                        PARTITION BY p.branch_id
                        ORDER BY p.stock DESC, p.id ASC
                    ) AS row_in_branch
                FROM products p
                INNER JOIN branches b ON b.id = p.branch_id
                WHERE b.franchise_id = ?
            )
            WHERE row_in_branch = 1
            "#,
        )
        .bind(franchise_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("product.find_top_stock_by_franchise", e))?;

        rows.iter().map(row_to_top_stock).collect()
    }
}
