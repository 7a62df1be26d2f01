//! Unified error taxonomy for the domain layer.
//!
//! Every use case fails with one of these kinds so callers can branch on
//! the variant instead of parsing message text. Storage failures are
//! carried opaquely; the engine never interprets them.

use thiserror::Error;

/// Unified error type for domain operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A name is already taken, or a rename targets the current value.
    #[error("{0}")]
    Conflict(String),

    /// Input violates a domain invariant (e.g. negative stock).
    #[error("{0}")]
    InvalidArgument(String),

    /// Opaque storage failure, passed through unchanged.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Create a not-found error naming the missing entity and id.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error for name collisions.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an invalid-argument error for rejected input values.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Wrap an uninterpreted storage failure.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
