//! The uniform JSON response envelope.
//!
//! Every endpoint answers `{success, data?, error?, message?, _warning?}`.
//! Fallback-served results carry `_warning` so the dashboard can show a
//! degraded-mode banner.

use serde::Serialize;

use crate::services::{Origin, Served};

/// Warning attached to responses served from the mock store.
pub const FALLBACK_WARNING: &str = "Using mock data (database unavailable)";

/// The response envelope. Absent fields are omitted from the JSON.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "_warning", skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful response.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            warning: None,
        }
    }

    /// A successful response from a facade, warning when served by the
    /// fallback.
    pub fn served(served: Served<T>) -> Self {
        let mut response = Self::ok(served.data);
        if served.origin.is_fallback() {
            response.warning = Some(FALLBACK_WARNING.to_owned());
        }
        response
    }

    /// A successful response with an explicit origin (delete has no data).
    pub fn with_origin(data: T, origin: Origin) -> Self {
        Self::served(Served { data, origin })
    }

    /// A failed response with a client-facing error.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            warning: None,
        }
    }

    /// Attach an operator-facing diagnostic message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_omits_absent_fields() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).expect("serialize");
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("error").is_none());
        assert!(json.get("message").is_none());
        assert!(json.get("_warning").is_none());
    }

    #[test]
    fn fallback_served_carries_warning_key() {
        let served = Served {
            data: 7,
            origin: Origin::Fallback,
        };
        let json = serde_json::to_value(ApiResponse::served(served)).expect("serialize");
        assert_eq!(json["_warning"], FALLBACK_WARNING);
    }

    #[test]
    fn primary_served_has_no_warning() {
        let served = Served {
            data: 7,
            origin: Origin::Primary,
        };
        let json = serde_json::to_value(ApiResponse::served(served)).expect("serialize");
        assert!(json.get("_warning").is_none());
    }

    #[test]
    fn failure_carries_error_and_message() {
        let response =
            ApiResponse::<()>::failure("Database error").with_message("connection refused");
        let json = serde_json::to_value(response).expect("serialize");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Database error");
        assert_eq!(json["message"], "connection refused");
    }
}
