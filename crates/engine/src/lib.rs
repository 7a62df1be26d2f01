//! Franchise Engine library.
//!
//! This crate contains all server-side code for the franchise service.
//!
//! ## Structure
//!
//! - `use_cases/` - Business operation orchestration (the decision logic)
//! - `infrastructure/` - Port traits and SQLite adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
