//! Authentication service.
//!
//! Credential-based login with one hard availability guarantee: the bootstrap
//! admin from configuration is checked *before* any store access, so there is
//! always a working login path while the database is down — the same outage
//! the mock-store fallback is designed for.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use storeroom_core::Email;

use crate::config::BootstrapAdmin;
use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::{CurrentAdmin, NewAdmin, User, user::DEFAULT_ROLE};

/// Minimum password length for onboarded accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles login and admin onboarding. Constructed per request from the pool
/// and the bootstrap account config.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    bootstrap: &'a BootstrapAdmin,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, bootstrap: &'a BootstrapAdmin) -> Self {
        Self {
            users: UserRepository::new(pool),
            bootstrap,
        }
    }

    /// Login with email and password.
    ///
    /// The bootstrap admin short-circuits before the database is consulted.
    /// A database outage on the regular path reads as invalid credentials to
    /// the client (and is logged for the operator) rather than a 500.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        let email = Email::parse(email)?;
        let password = password.trim();

        if self.bootstrap.matches(&email, password) {
            return Ok(self.bootstrap.identity());
        }

        let (user, password_hash) = match self.users.get_with_password(&email).await {
            Ok(Some(found)) => found,
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(err) => {
                tracing::warn!(error = %err, "login lookup failed, rejecting credentials");
                return Err(AuthError::InvalidCredentials);
            }
        };

        verify_password(password, &password_hash)?;

        Ok(CurrentAdmin::from(user))
    }

    /// Onboard a new admin account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is registered,
    /// `AuthError::WeakPassword`/`AuthError::EmptyName` on invalid input, and
    /// `AuthError::Repository` if the store cannot take the write — account
    /// creation is durability-critical and never falls back to the mock store.
    pub async fn onboard_admin(&self, new: NewAdmin) -> Result<User, AuthError> {
        let email = Email::parse(&new.email)?;

        if new.name.trim().is_empty() {
            return Err(AuthError::EmptyName);
        }
        validate_password(&new.password)?;

        let password_hash = hash_password(&new.password)?;

        let user = self
            .users
            .create(new.name.trim(), &email, &password_hash, DEFAULT_ROLE)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }
}

/// Validate that a password meets minimum requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    fn bootstrap() -> BootstrapAdmin {
        BootstrapAdmin {
            name: "Demo Admin".to_owned(),
            email: Email::parse("admin@example.com").expect("valid"),
            password: SecretString::from("AdmiN_7788!@#"),
        }
    }

    /// Lazy pool pointing at a dead address: every query fails (quickly, via
    /// a short acquire timeout), nothing at construction time does.
    fn dead_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://postgres@127.0.0.1:1/storeroom")
            .expect("parseable url")
    }

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("correct horse").expect("hash");
        assert!(verify_password("correct horse", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong horse", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn short_password_is_weak() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("long enough").is_ok());
    }

    #[tokio::test]
    async fn bootstrap_admin_logs_in_without_database() {
        let pool = dead_pool();
        let bootstrap = bootstrap();
        let auth = AuthService::new(&pool, &bootstrap);

        let admin = auth
            .login("Admin@Example.com", " AdmiN_7788!@# ")
            .await
            .expect("bootstrap login");
        assert_eq!(admin.email, "admin@example.com");
        assert_eq!(admin.role, "admin");
    }

    #[tokio::test]
    async fn wrong_bootstrap_password_is_rejected() {
        let pool = dead_pool();
        let bootstrap = bootstrap();
        let auth = AuthService::new(&pool, &bootstrap);

        // Falls through to the (dead) database and reads as bad credentials
        let result = auth.login("admin@example.com", "nope").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_up_front() {
        let pool = dead_pool();
        let bootstrap = bootstrap();
        let auth = AuthService::new(&pool, &bootstrap);

        let result = auth.login("not-an-email", "whatever").await;
        assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn onboard_rejects_invalid_input_before_store() {
        let pool = dead_pool();
        let bootstrap = bootstrap();
        let auth = AuthService::new(&pool, &bootstrap);

        let result = auth
            .onboard_admin(NewAdmin {
                name: "  ".to_owned(),
                email: "new@example.com".to_owned(),
                password: "long enough".to_owned(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::EmptyName)));

        let result = auth
            .onboard_admin(NewAdmin {
                name: "New Admin".to_owned(),
                email: "new@example.com".to_owned(),
                password: "short".to_owned(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[tokio::test]
    async fn onboard_surfaces_store_failure() {
        let pool = dead_pool();
        let bootstrap = bootstrap();
        let auth = AuthService::new(&pool, &bootstrap);

        let result = auth
            .onboard_admin(NewAdmin {
                name: "New Admin".to_owned(),
                email: "new@example.com".to_owned(),
                password: "long enough".to_owned(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::Repository(_))));
    }
}
