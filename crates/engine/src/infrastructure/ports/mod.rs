//! Ports - the contracts the use-case layer depends on.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{BranchRepo, ClockPort, FranchiseRepo, ProductRepo};

#[cfg(test)]
pub use repos::{MockBranchRepo, MockFranchiseRepo, MockProductRepo};
