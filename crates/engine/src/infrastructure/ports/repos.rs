//! Repository port traits for database access.
//!
//! One gateway per entity. All operations are asynchronous; lookups
//! return `Option` rather than failing so the use cases own the
//! not-found decision (and its message).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use franchise_domain::{
    Branch, BranchId, Franchise, FranchiseId, NewBranch, NewFranchise, NewProduct, Product,
    ProductId, TopStockProduct,
};

use super::error::RepoError;

/// Time source injected into the adapters so persisted timestamps are
/// testable.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FranchiseRepo: Send + Sync {
    /// Persist a draft and return the stored entity with its assigned id.
    async fn save(&self, franchise: &NewFranchise) -> Result<Franchise, RepoError>;
    async fn find_by_id(&self, id: FranchiseId) -> Result<Option<Franchise>, RepoError>;
    /// Exact-name lookup, used for the uniqueness checks.
    async fn find_by_name(&self, name: &str) -> Result<Option<Franchise>, RepoError>;
    /// Rename in place; `None` when the id no longer exists.
    async fn update_name(
        &self,
        id: FranchiseId,
        name: &str,
    ) -> Result<Option<Franchise>, RepoError>;
    async fn find_all(&self) -> Result<Vec<Franchise>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BranchRepo: Send + Sync {
    async fn save(&self, branch: &NewBranch) -> Result<Branch, RepoError>;
    async fn find_by_id(&self, id: BranchId) -> Result<Option<Branch>, RepoError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Branch>, RepoError>;
    async fn update_name(&self, id: BranchId, name: &str) -> Result<Option<Branch>, RepoError>;
    async fn find_by_franchise(&self, franchise_id: FranchiseId)
        -> Result<Vec<Branch>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepo: Send + Sync {
    /// Persist a draft. The adapter re-validates the stock invariant and
    /// fails with invalid input on negative values.
    async fn save(&self, product: &NewProduct) -> Result<Product, RepoError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepoError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepoError>;
    async fn update_name(&self, id: ProductId, name: &str) -> Result<Option<Product>, RepoError>;
    /// Overwrite stock; `None` when the id no longer exists.
    async fn update_stock(&self, id: ProductId, stock: i32) -> Result<Option<Product>, RepoError>;
    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepoError>;
    /// Per-branch maximum-stock rows for one franchise, computed in
    /// storage. Ties break on the lowest product id.
    async fn find_top_stock_by_franchise(
        &self,
        franchise_id: FranchiseId,
    ) -> Result<Vec<TopStockProduct>, RepoError>;
}
