//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{BranchRepo, FranchiseRepo, ProductRepo};
use crate::use_cases::{BranchUseCases, FranchiseUseCases, ProductUseCases};

/// Main application state.
///
/// Holds the wired use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub franchises: FranchiseUseCases,
    pub branches: BranchUseCases,
    pub products: ProductUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        franchise_repo: Arc<dyn FranchiseRepo>,
        branch_repo: Arc<dyn BranchRepo>,
        product_repo: Arc<dyn ProductRepo>,
    ) -> Self {
        Self {
            franchises: FranchiseUseCases::new(franchise_repo.clone()),
            branches: BranchUseCases::new(branch_repo.clone(), franchise_repo.clone()),
            products: ProductUseCases::new(product_repo, branch_repo, franchise_repo),
        }
    }
}
