//! Franchise API routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use franchise_domain::{Franchise, FranchiseId};
use uuid::Uuid;

use crate::api::dto::{CreateFranchiseRequest, UpdateNameRequest};
use crate::api::http::{require_name, ApiError};
use crate::app::App;

/// Create a franchise
pub async fn create_franchise(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateFranchiseRequest>,
) -> Result<(StatusCode, Json<Franchise>), ApiError> {
    require_name("name", &req.name)?;

    let franchise = app.franchises.create.execute(req.name.trim()).await?;
    Ok((StatusCode::CREATED, Json(franchise)))
}

/// Rename a franchise
pub async fn update_franchise_name(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNameRequest>,
) -> Result<Json<Franchise>, ApiError> {
    require_name("name", &req.name)?;

    let franchise = app
        .franchises
        .rename
        .execute(FranchiseId::from_uuid(id), req.name.trim())
        .await?;
    Ok(Json(franchise))
}

/// List all franchises
pub async fn list_franchises(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<Franchise>>, ApiError> {
    let franchises = app.franchises.list.execute().await?;
    Ok(Json(franchises))
}
