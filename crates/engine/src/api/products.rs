//! Product API routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use franchise_domain::{BranchId, FranchiseId, Product, ProductId, TopStockProduct};
use uuid::Uuid;

use crate::api::dto::{CreateProductRequest, UpdateNameRequest, UpdateStockRequest};
use crate::api::http::{require_name, ApiError};
use crate::app::App;

/// Create a product under a branch
pub async fn create_product(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    require_name("name", &req.name)?;
    if req.stock < 0 {
        return Err(ApiError::BadRequest(format!(
            "stock must be >= 0, got {}",
            req.stock
        )));
    }

    let product = app
        .products
        .create
        .execute(BranchId::from_uuid(req.branch_id), req.name.trim(), req.stock)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Rename a product
pub async fn update_product_name(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNameRequest>,
) -> Result<Json<Product>, ApiError> {
    require_name("name", &req.name)?;

    let product = app
        .products
        .rename
        .execute(ProductId::from_uuid(id), req.name.trim())
        .await?;
    Ok(Json(product))
}

/// Overwrite a product's stock
pub async fn update_product_stock(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStockRequest>,
) -> Result<Json<Product>, ApiError> {
    let product = app
        .products
        .restock
        .execute(ProductId::from_uuid(id), req.stock)
        .await?;
    Ok(Json(product))
}

/// Delete a product
pub async fn delete_product(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.products
        .delete
        .execute(ProductId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Highest-stock product per branch of a franchise
pub async fn top_stock_by_franchise(
    State(app): State<Arc<App>>,
    Path(franchise_id): Path<Uuid>,
) -> Result<Json<Vec<TopStockProduct>>, ApiError> {
    let rows = app
        .products
        .top_stock_by_franchise
        .execute(FranchiseId::from_uuid(franchise_id))
        .await?;
    Ok(Json(rows))
}
