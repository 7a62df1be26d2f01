//! Domain entities for the franchise hierarchy.
//!
//! Each entity comes in two shapes: a draft (`New*`) built by a use case
//! before the storage layer has assigned an id, and the persisted form
//! returned by the repositories.

mod branch;
mod franchise;
mod product;

pub use branch::{Branch, NewBranch};
pub use franchise::{Franchise, NewFranchise};
pub use product::{validate_stock, NewProduct, Product, TopStockProduct};
