//! Admin user management commands.

use storeroom_core::Email;
use storeroom_server::db::users::UserRepository;
use storeroom_server::services::auth::hash_password;

use super::{CommandError, connect};

/// Create a new admin user.
///
/// # Errors
///
/// Returns `CommandError` on invalid input, a duplicate email, or a database
/// failure.
pub async fn create(email: &str, name: &str, password: &str, role: &str) -> Result<(), CommandError> {
    let email = Email::parse(email).map_err(|e| CommandError::Invalid(e.to_string()))?;

    if name.trim().is_empty() {
        return Err(CommandError::Invalid("name cannot be empty".to_owned()));
    }
    if password.len() < 8 {
        return Err(CommandError::Invalid(
            "password must be at least 8 characters".to_owned(),
        ));
    }

    let password_hash =
        hash_password(password).map_err(|e| CommandError::Invalid(e.to_string()))?;

    let pool = connect().await?;
    let users = UserRepository::new(&pool);

    let user = users
        .create(name.trim(), &email, &password_hash, role)
        .await
        .map_err(|e| CommandError::Invalid(e.to_string()))?;

    tracing::info!(id = %user.id, email = %user.email, role = %user.role, "admin user created");
    Ok(())
}
