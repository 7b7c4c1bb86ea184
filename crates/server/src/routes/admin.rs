//! Admin management route handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{NewAdmin, User};
use crate::response::ApiResponse;
use crate::services::AuthService;
use crate::state::AppState;

/// Onboard a new admin account. Only admins can create admins.
///
/// Account creation is durability-critical: a dead database answers 500, not
/// a mock-store write.
#[instrument(skip(admin, state, body))]
pub async fn onboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    body: std::result::Result<Json<NewAdmin>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let Json(new) = body?;

    let auth = AuthService::new(state.pool(), &state.config().bootstrap);
    let user = auth.onboard_admin(new).await?;

    tracing::info!(onboarded_by = %admin.email, new_admin = %user.email, "admin onboarded");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}
