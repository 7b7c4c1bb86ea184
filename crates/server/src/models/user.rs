//! Admin account domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storeroom_core::{Email, UserId};

/// Default role assigned to onboarded accounts.
pub const DEFAULT_ROLE: &str = "admin";

/// An admin dashboard account.
///
/// The password hash lives only in the users repository; this type cannot
/// leak it into a response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inbound payload for onboarding a new admin account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_has_no_password_field() {
        let user = User {
            id: UserId::new("usr-1"),
            name: "Demo Admin".to_owned(),
            email: Email::parse("admin@example.com").expect("valid"),
            role: DEFAULT_ROLE.to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).expect("serialize");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "admin");
    }
}
