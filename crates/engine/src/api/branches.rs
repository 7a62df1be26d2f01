//! Branch API routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use franchise_domain::{Branch, BranchId, FranchiseId};
use uuid::Uuid;

use crate::api::dto::{CreateBranchRequest, UpdateNameRequest};
use crate::api::http::{require_name, ApiError};
use crate::app::App;

/// Create a branch under a franchise
pub async fn create_branch(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateBranchRequest>,
) -> Result<(StatusCode, Json<Branch>), ApiError> {
    require_name("name", &req.name)?;

    let branch = app
        .branches
        .create
        .execute(FranchiseId::from_uuid(req.franchise_id), req.name.trim())
        .await?;
    Ok((StatusCode::CREATED, Json(branch)))
}

/// Rename a branch
pub async fn update_branch_name(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNameRequest>,
) -> Result<Json<Branch>, ApiError> {
    require_name("name", &req.name)?;

    let branch = app
        .branches
        .rename
        .execute(BranchId::from_uuid(id), req.name.trim())
        .await?;
    Ok(Json(branch))
}

/// List the branches of a franchise
pub async fn list_branches_by_franchise(
    State(app): State<Arc<App>>,
    Path(franchise_id): Path<Uuid>,
) -> Result<Json<Vec<Branch>>, ApiError> {
    let branches = app
        .branches
        .list_by_franchise
        .execute(FranchiseId::from_uuid(franchise_id))
        .await?;
    Ok(Json(branches))
}
