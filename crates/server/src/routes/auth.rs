//! Auth route handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireSession;
use crate::models::{CurrentAdmin, session::session_keys};
use crate::response::ApiResponse;
use crate::services::AuthService;
use crate::state::AppState;

/// Credential login payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credential login.
///
/// The bootstrap admin authenticates even while the database is unreachable;
/// everyone else is checked against the users table.
#[instrument(skip(state, session, body))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CurrentAdmin>>> {
    let Json(request) = body?;

    let auth = AuthService::new(state.pool(), &state.config().bootstrap);
    let admin = auth.login(&request.email, &request.password).await?;

    // Fresh session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    session
        .insert(session_keys::CURRENT_ADMIN, admin.clone())
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    Ok(Json(ApiResponse::ok(admin)))
}

/// Clear the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<ApiResponse<serde_json::Value>>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    Ok(Json(ApiResponse::ok(serde_json::json!({}))))
}

/// The current session identity. 401 without a session.
pub async fn me(RequireSession(admin): RequireSession) -> Json<ApiResponse<CurrentAdmin>> {
    Json(ApiResponse::ok(admin))
}
