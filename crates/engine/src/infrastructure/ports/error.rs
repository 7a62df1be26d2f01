//! Error types for port operations.

use franchise_domain::DomainError;

/// Repository operation errors with context for debugging.
///
/// The use-case layer does not interpret `Database` failures; they pass
/// through as opaque storage errors. Two variants carry meaning across
/// the boundary: `ConstraintViolation` (a UNIQUE index firing under a
/// read-then-write race is the authoritative duplicate-name signal, a
/// conflict) and `InvalidInput` (a rejected value such as negative
/// stock, an invalid argument).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Row could not be decoded into a domain type.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage-level uniqueness constraint violated (duplicate name).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A value was rejected before or by storage (negative stock).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a ConstraintViolation error.
    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl ToString) -> Self {
        Self::InvalidInput(message.to_string())
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::ConstraintViolation(msg) => DomainError::conflict(msg),
            RepoError::InvalidInput(msg) => DomainError::invalid_argument(msg),
            other => DomainError::storage(other.to_string()),
        }
    }
}
