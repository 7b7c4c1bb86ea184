//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding with the JSON envelope. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::response::ApiResponse;
use crate::services::{AuthError, CatalogError, MediaError, OrderError};

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body was not valid JSON (or did not match the schema).
    #[error("Invalid JSON body")]
    InvalidJson(#[from] JsonRejection),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session missing or lacks the required role.
    #[error("Unauthorized")]
    Unauthorized,

    /// Persistent store failed on a path with no fallback.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Media host operation failed.
    #[error("Upload error: {0}")]
    Media(#[from] MediaError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => Self::NotFound("Product not found".to_owned()),
            CatalogError::Validation(v) => Self::BadRequest(v.to_string()),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound => Self::NotFound("Order not found".to_owned()),
            OrderError::Unavailable(e) => Self::Database(e),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Media(_) => StatusCode::BAD_GATEWAY,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists
                | AuthError::WeakPassword(_)
                | AuthError::EmptyName
                | AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Client-facing error text. Internal details stay out of it; the
    /// diagnostic message carries them where appropriate.
    fn client_error(&self) -> String {
        match self {
            Self::InvalidJson(_) => "Invalid JSON body".to_owned(),
            Self::BadRequest(msg) => msg.clone(),
            Self::NotFound(what) => what.clone(),
            Self::Unauthorized => "Unauthorized".to_owned(),
            Self::Database(_) => "Database error".to_owned(),
            Self::Internal(_) => "Internal server error".to_owned(),
            Self::Media(_) => "Upload failed".to_owned(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_owned(),
                AuthError::UserAlreadyExists => "User already exists".to_owned(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::EmptyName => "Name cannot be empty".to_owned(),
                AuthError::InvalidEmail(_) => "Invalid email address".to_owned(),
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Failed to onboard admin".to_owned()
                }
            },
        }
    }

    /// Operator-facing diagnostic attached to 5xx responses, where the
    /// underlying store's error text helps diagnosis.
    fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Database(e) | Self::Auth(AuthError::Repository(e)) => {
                Some(format!("Database error: {e}"))
            }
            Self::Media(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.status().is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let mut body = ApiResponse::<()>::failure(self.client_error());
        if let Some(diagnostic) = self.diagnostic() {
            body = body.with_message(diagnostic);
        }

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            get_status(AppError::BadRequest("x".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("x".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::Internal("x".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::UserAlreadyExists)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn catalog_errors_map_to_http() {
        let not_found: AppError = CatalogError::NotFound.into();
        assert_eq!(get_status(not_found), StatusCode::NOT_FOUND);
    }

    #[test]
    fn order_write_failure_maps_to_500_with_diagnostic() {
        let err: AppError =
            OrderError::Unavailable(RepositoryError::Database(sqlx::Error::PoolTimedOut)).into();
        let diagnostic = err.diagnostic().expect("diagnostic");
        assert!(diagnostic.starts_with("Database error:"));
        assert_eq!(get_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_errors_hide_details_from_client() {
        let err = AppError::Database(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.client_error(), "Database error");
    }
}
