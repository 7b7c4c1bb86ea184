//! Dashboard aggregates.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use crate::middleware::RequireAdmin;
use crate::response::ApiResponse;
use crate::services::Served;
use crate::state::AppState;

/// Stock level below which a product counts as low stock.
const LOW_STOCK_THRESHOLD: i32 = 10;

/// Aggregates for the dashboard landing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub product_count: usize,
    pub low_stock_count: usize,
    pub order_count: usize,
    pub pending_order_count: usize,
    /// Revenue across completed and delivered orders.
    pub total_revenue: Decimal,
}

/// Compute dashboard aggregates from the facades.
///
/// Both reads ride the resilient facades, so the dashboard stays populated
/// during an outage; the response is flagged if either read was served by
/// the fallback.
#[instrument(skip(admin, state))]
pub async fn stats(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<ApiResponse<DashboardStats>> {
    let products = state.catalog().list().await;
    let orders = state.orders().list().await;

    let stats = DashboardStats {
        product_count: products.data.len(),
        low_stock_count: products
            .data
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .count(),
        order_count: orders.data.len(),
        pending_order_count: orders
            .data
            .iter()
            .filter(|o| o.status == storeroom_core::OrderStatus::Pending)
            .count(),
        total_revenue: orders
            .data
            .iter()
            .filter(|o| o.status.is_settled())
            .map(|o| o.total_amount)
            .sum(),
    };

    let origin = if products.origin.is_fallback() || orders.origin.is_fallback() {
        crate::services::Origin::Fallback
    } else {
        crate::services::Origin::Primary
    };

    Json(ApiResponse::served(Served {
        data: stats,
        origin,
    }))
}
