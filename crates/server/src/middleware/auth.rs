//! Authentication extractors for route handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentAdmin, session::session_keys};

/// Extractor that requires an authenticated session with the admin role.
///
/// Rejects with 401 (JSON envelope) when the session is missing, anonymous,
/// or carries a non-admin role.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts).await.ok_or(AppError::Unauthorized)?;

        if !admin.is_admin() {
            return Err(AppError::Unauthorized);
        }

        Ok(Self(admin))
    }
}

/// Extractor that requires any authenticated session, regardless of role.
pub struct RequireSession(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts).await.ok_or(AppError::Unauthorized)?;
        Ok(Self(admin))
    }
}

/// Read the current admin from the request's session, if any.
async fn current_admin(parts: &Parts) -> Option<CurrentAdmin> {
    // The session is placed in extensions by SessionManagerLayer
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}
