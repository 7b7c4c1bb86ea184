//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::instrument;

use storeroom_core::OrderId;

use crate::error::Result;
use crate::models::{Order, StatusUpdate};
use crate::response::ApiResponse;
use crate::state::AppState;

/// List orders. Never fails: a dead database yields the mock history with a
/// `_warning`.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<Order>>> {
    let served = state.orders().list().await;
    Json(ApiResponse::served(served))
}

/// Order detail, addressable by id or by order reference. 404 when absent.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>> {
    let served = state.orders().get(&OrderId::new(id)).await?;
    Ok(Json(ApiResponse::served(served)))
}

/// Transition an order's status.
///
/// No fallback here: if the database cannot take the write the client gets a
/// 500 with the store's diagnostic, never a silent in-memory update.
#[instrument(skip(state, body))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<Order>>> {
    let Json(update) = body?;
    let order = state
        .orders()
        .update_status(&OrderId::new(id), update.status)
        .await?;
    Ok(Json(ApiResponse::ok(order)))
}
