//! Franchise repository implementation for SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use franchise_domain::{Franchise, FranchiseId, NewFranchise};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{map_sqlx_err, parse_id, parse_timestamp};
use crate::infrastructure::ports::{ClockPort, FranchiseRepo, RepoError};

pub struct SqliteFranchiseRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteFranchiseRepo {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self { pool, clock }
    }
}

fn row_to_franchise(row: &SqliteRow) -> Result<Franchise, RepoError> {
    Ok(Franchise {
        id: parse_id(row.get::<&str, _>("id"))?,
        name: row.get("name"),
        created_at: parse_timestamp(row.get::<&str, _>("created_at"))?,
        updated_at: parse_timestamp(row.get::<&str, _>("updated_at"))?,
    })
}

#[async_trait]
impl FranchiseRepo for SqliteFranchiseRepo {
    async fn save(&self, franchise: &NewFranchise) -> Result<Franchise, RepoError> {
        let id = FranchiseId::new();
        let now = self.clock.now();

        sqlx::query(
            r#"
            INSERT INTO franchises (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&franchise.name)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("franchise.save", e))?;

        tracing::debug!(franchise_id = %id, "Inserted franchise: {}", franchise.name);
        Ok(Franchise {
            id,
            name: franchise.name.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: FranchiseId) -> Result<Option<Franchise>, RepoError> {
        let row = sqlx::query("SELECT * FROM franchises WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("franchise.find_by_id", e))?;

        row.as_ref().map(row_to_franchise).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Franchise>, RepoError> {
        let row = sqlx::query("SELECT * FROM franchises WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("franchise.find_by_name", e))?;

        row.as_ref().map(row_to_franchise).transpose()
    }

    async fn update_name(
        &self,
        id: FranchiseId,
        name: &str,
    ) -> Result<Option<Franchise>, RepoError> {
        let result = sqlx::query("UPDATE franchises SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(self.clock.now().to_rfc3339())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("franchise.update_name", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Franchise>, RepoError> {
        let rows = sqlx::query("SELECT * FROM franchises")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("franchise.find_all", e))?;

        rows.iter().map(row_to_franchise).collect()
    }
}
