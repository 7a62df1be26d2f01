//! Use cases - business operation orchestration.
//!
//! One struct per operation. Each is a short sequential pipeline over the
//! repository ports: existence check, duplicate check, then the single
//! write. All cross-entity invariants are enforced here.

pub mod branch;
pub mod franchise;
pub mod product;

pub use branch::BranchUseCases;
pub use franchise::FranchiseUseCases;
pub use product::ProductUseCases;
