//! Branch repository implementation for SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use franchise_domain::{Branch, BranchId, FranchiseId, NewBranch};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{map_sqlx_err, parse_id, parse_timestamp};
use crate::infrastructure::ports::{BranchRepo, ClockPort, RepoError};

pub struct SqliteBranchRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteBranchRepo {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self { pool, clock }
    }
}

fn row_to_branch(row: &SqliteRow) -> Result<Branch, RepoError> {
    Ok(Branch {
        id: parse_id(row.get::<&str, _>("id"))?,
        franchise_id: parse_id(row.get::<&str, _>("franchise_id"))?,
        name: row.get("name"),
        created_at: parse_timestamp(row.get::<&str, _>("created_at"))?,
        updated_at: parse_timestamp(row.get::<&str, _>("updated_at"))?,
    })
}

#[async_trait]
impl BranchRepo for SqliteBranchRepo {
    async fn save(&self, branch: &NewBranch) -> Result<Branch, RepoError> {
        let id = BranchId::new();
        let now = self.clock.now();

        sqlx::query(
            r#"
            INSERT INTO branches (id, franchise_id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(branch.franchise_id.to_string())
        .bind(&branch.name)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("branch.save", e))?;

        tracing::debug!(branch_id = %id, "Inserted branch: {}", branch.name);
        Ok(Branch {
            id,
            franchise_id: branch.franchise_id,
            name: branch.name.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: BranchId) -> Result<Option<Branch>, RepoError> {
        let row = sqlx::query("SELECT * FROM branches WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("branch.find_by_id", e))?;

        row.as_ref().map(row_to_branch).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Branch>, RepoError> {
        let row = sqlx::query("SELECT * FROM branches WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("branch.find_by_name", e))?;

        row.as_ref().map(row_to_branch).transpose()
    }

    async fn update_name(&self, id: BranchId, name: &str) -> Result<Option<Branch>, RepoError> {
        let result = sqlx::query("UPDATE branches SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(self.clock.now().to_rfc3339())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("branch.update_name", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn find_by_franchise(
        &self,
        franchise_id: FranchiseId,
    ) -> Result<Vec<Branch>, RepoError> {
        let rows = sqlx::query("SELECT * FROM branches WHERE franchise_id = ?")
            .bind(franchise_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("branch.find_by_franchise", e))?;

        rows.iter().map(row_to_branch).collect()
    }
}
