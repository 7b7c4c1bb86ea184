//! Session-scoped identity.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Session storage keys.
pub mod session_keys {
    /// The logged-in admin, stored on successful login.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The identity carried by an authenticated session.
///
/// Stored in the session on login; the `role` claim gates privileged routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAdmin {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CurrentAdmin {
    /// Whether this session may use privileged routes.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl From<User> for CurrentAdmin {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
            email: user.email.into_inner(),
            role: user.role,
        }
    }
}
