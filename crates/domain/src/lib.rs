//! Franchise domain library.
//!
//! Core types for the franchise hierarchy (Franchise -> Branch -> Product),
//! typed identifiers, and the shared error taxonomy. This crate holds no
//! state and performs no I/O; persistence lives behind port traits in the
//! engine crate.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{
    validate_stock, Branch, Franchise, NewBranch, NewFranchise, NewProduct, Product,
    TopStockProduct,
};
pub use error::DomainError;
pub use ids::{BranchId, FranchiseId, ProductId};
