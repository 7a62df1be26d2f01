//! Product entity and the top-stock projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{BranchId, ProductId};

/// A product stocked by one branch.
///
/// `name` is unique across all products. `stock` is never negative; a
/// write that would violate that must fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub branch_id: BranchId,
    pub name: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product draft awaiting its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub branch_id: BranchId,
    pub name: String,
    pub stock: i32,
}

impl NewProduct {
    pub fn new(branch_id: BranchId, name: impl Into<String>, stock: i32) -> Self {
        Self {
            branch_id,
            name: name.into(),
            stock,
        }
    }

    /// Reject drafts that would violate the non-negative stock invariant.
    pub fn validate_stock(&self) -> Result<(), DomainError> {
        validate_stock(self.stock)
    }
}

/// Shared stock check used by drafts and stock updates.
pub fn validate_stock(stock: i32) -> Result<(), DomainError> {
    if stock < 0 {
        return Err(DomainError::invalid_argument(format!(
            "product stock must be >= 0, got {stock}"
        )));
    }
    Ok(())
}

/// Read-only projection: the highest-stock product of one branch.
///
/// One row per branch of a franchise; branches without products
/// contribute no row. Produced by the storage layer, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopStockProduct {
    pub branch_id: BranchId,
    pub branch_name: String,
    pub product_name: String,
    pub stock: i32,
}
