//! SQLite-backed repositories.
//!
//! Names carry UNIQUE indexes and stock carries a CHECK constraint, so
//! storage is the final authority on both invariants even when two
//! requests pass the use-case checks concurrently.

mod branch_repo;
mod franchise_repo;
mod product_repo;


use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::infrastructure::ports::{BranchRepo, ClockPort, FranchiseRepo, ProductRepo, RepoError};

pub use branch_repo::SqliteBranchRepo;
pub use franchise_repo::SqliteFranchiseRepo;
pub use product_repo::SqliteProductRepo;

/// Open (or create) the database at `db_path`.
pub async fn connect(db_path: &str) -> Result<SqlitePool, RepoError> {
    SqlitePool::connect(&format!("sqlite:{db_path}?mode=rwc"))
        .await
        .map_err(|e| RepoError::database("connect", e))
}

/// Create tables and indexes if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS franchises (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepoError::database("schema", e))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS branches (
            id TEXT PRIMARY KEY,
            franchise_id TEXT NOT NULL REFERENCES franchises(id),
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepoError::database("schema", e))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY,
            branch_id TEXT NOT NULL REFERENCES branches(id),
            name TEXT NOT NULL,
            stock INTEGER NOT NULL CHECK (stock >= 0),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepoError::database("schema", e))?;

    for statement in [
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_franchises_name ON franchises(name)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_branches_name ON branches(name)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_products_name ON products(name)",
        "CREATE INDEX IF NOT EXISTS idx_branches_franchise ON branches(franchise_id)",
        "CREATE INDEX IF NOT EXISTS idx_products_branch ON products(branch_id)",
    ] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("schema", e))?;
    }

    Ok(())
}

/// Container for the three repositories sharing one pool.
pub struct SqliteRepositories {
    pub franchise: Arc<dyn FranchiseRepo>,
    pub branch: Arc<dyn BranchRepo>,
    pub product: Arc<dyn ProductRepo>,
}

impl SqliteRepositories {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            franchise: Arc::new(SqliteFranchiseRepo::new(pool.clone(), clock.clone())),
            branch: Arc::new(SqliteBranchRepo::new(pool.clone(), clock.clone())),
            product: Arc::new(SqliteProductRepo::new(pool, clock)),
        }
    }
}

/// Map a sqlx failure. Unique violations surface as constraint errors,
/// the authoritative conflict signal; check violations (negative stock)
/// surface as invalid input.
pub(crate) fn map_sqlx_err(operation: &'static str, err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return RepoError::constraint(db.message());
        }
        if db.is_check_violation() {
            return RepoError::invalid_input(db.message());
        }
    }
    RepoError::database(operation, err)
}

pub(crate) fn parse_id<T>(raw: &str) -> Result<T, RepoError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e: T::Err| RepoError::serialization(format!("bad id {raw}: {e}")))
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::serialization(format!("bad timestamp {raw}: {e}")))
}
