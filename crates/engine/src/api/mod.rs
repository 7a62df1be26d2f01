//! HTTP entry points.

mod branches;
mod dto;
mod franchises;
pub mod http;
mod products;

pub use http::{routes, ApiError};
