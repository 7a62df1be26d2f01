//! HTTP routes.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use franchise_domain::DomainError;

use crate::api::{branches, franchises, products};
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/v1/franchises/create",
            post(franchises::create_franchise),
        )
        .route(
            "/api/v1/franchises/{id}/name",
            put(franchises::update_franchise_name),
        )
        .route("/api/v1/franchises", get(franchises::list_franchises))
        .route("/api/v1/branches/create", post(branches::create_branch))
        .route(
            "/api/v1/branches/{id}/name",
            put(branches::update_branch_name),
        )
        .route(
            "/api/v1/franchises/{franchise_id}/branches",
            get(branches::list_branches_by_franchise),
        )
        .route("/api/v1/products/create", post(products::create_product))
        .route(
            "/api/v1/products/{id}/name",
            put(products::update_product_name),
        )
        .route(
            "/api/v1/products/{id}/stock",
            put(products::update_product_stock),
        )
        .route("/api/v1/products/{id}", delete(products::delete_product))
        .route(
            "/api/v1/franchises/{franchise_id}/top-stock-products",
            get(products::top_stock_by_franchise),
        )
}

async fn health() -> &'static str {
    "OK"
}

/// Boundary error with its HTTP status mapping.
///
/// Client faults (not found, conflict, bad input) carry their message;
/// storage failures are logged and answered with a generic body.
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg).into_response(),
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!("Storage failure answering request: {msg}");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::Conflict(msg) => ApiError::Conflict(msg),
            DomainError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            DomainError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

/// Reject blank names before they reach the use cases.
pub(crate) fn require_name(field: &'static str, name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_their_status_kind() {
        assert!(matches!(
            ApiError::from(DomainError::not_found("x")),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::conflict("x")),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::invalid_argument("x")),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(DomainError::storage("x")),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn blank_names_are_rejected_at_the_boundary() {
        assert!(require_name("name", "  ").is_err());
        assert!(require_name("name", "Acme").is_ok());
    }
}
