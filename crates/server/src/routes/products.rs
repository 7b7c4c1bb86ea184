//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;

use storeroom_core::ProductId;

use crate::error::Result;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::response::ApiResponse;
use crate::state::AppState;

/// List the catalog. Never fails: a dead database yields the mock catalog
/// with a `_warning`.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    let served = state.catalog().list().await;
    Json(ApiResponse::served(served))
}

/// Create a product.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>)> {
    let Json(input) = body?;
    let served = state.catalog().create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::served(served))))
}

/// Product detail. 404 when absent from the consulted store(s).
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>> {
    let served = state.catalog().get(&ProductId::new(id)).await?;
    Ok(Json(ApiResponse::served(served)))
}

/// Partial update. Identity in the payload is ignored; 404 when absent.
#[instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>> {
    let Json(patch) = body?;
    let served = state.catalog().update(&ProductId::new(id), patch).await?;
    Ok(Json(ApiResponse::served(served)))
}

/// Delete a product. 404 when the id is unknown.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let origin = state.catalog().delete(&ProductId::new(id)).await?;
    Ok(Json(ApiResponse::with_origin(
        serde_json::json!({}),
        origin,
    )))
}
