//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREROOM_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to the generic `DATABASE_URL`)
//!
//! ## Optional
//! - `STOREROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREROOM_PORT` - Listen port (default: 3000)
//! - `STOREROOM_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `STOREROOM_BOOTSTRAP_NAME` - Bootstrap admin display name (default: Demo Admin)
//! - `STOREROOM_BOOTSTRAP_EMAIL` - Bootstrap admin email (default: admin@example.com)
//! - `STOREROOM_BOOTSTRAP_PASSWORD` - Bootstrap admin password (demo default)
//! - `MEDIA_UPLOAD_URL` - Media host upload endpoint (uploads fail without it)
//! - `MEDIA_UPLOAD_KEY` - Media host API key
//! - `MEDIA_UPLOAD_FOLDER` - Media host folder (default: storeroom-products)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! The bootstrap admin is the always-available login path: it authenticates
//! before any store access, so operators can reach the dashboard while the
//! database is down. Override the demo defaults in any real deployment.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use storeroom_core::Email;

use crate::models::CurrentAdmin;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: String,
    /// Always-available bootstrap admin account
    pub bootstrap: BootstrapAdmin,
    /// Media host configuration; uploads are disabled without it
    pub media: Option<MediaConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// The bootstrap admin account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct BootstrapAdmin {
    /// Display name shown in the dashboard.
    pub name: String,
    /// Login email (normalized).
    pub email: Email,
    /// Login password.
    pub password: SecretString,
}

impl BootstrapAdmin {
    /// Whether the given (normalized) email and password match this account.
    #[must_use]
    pub fn matches(&self, email: &Email, password: &str) -> bool {
        email == &self.email && password == self.password.expose_secret()
    }

    /// The session identity for a bootstrap login.
    #[must_use]
    pub fn identity(&self) -> CurrentAdmin {
        CurrentAdmin {
            id: "bootstrap-admin".to_owned(),
            name: self.name.clone(),
            email: self.email.as_str().to_owned(),
            role: "admin".to_owned(),
        }
    }
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Media host configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct MediaConfig {
    /// Upload endpoint the server forwards files to.
    pub upload_url: String,
    /// API key presented as a bearer token.
    pub api_key: SecretString,
    /// Folder/namespace uploads are filed under.
    pub folder: String,
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("upload_url", &self.upload_url)
            .field("api_key", &"[REDACTED]")
            .field("folder", &self.folder)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("STOREROOM_DATABASE_URL")?;
        let host = get_env_or_default("STOREROOM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREROOM_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("STOREROOM_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREROOM_PORT".to_owned(), e.to_string()))?;
        let base_url = get_env_or_default("STOREROOM_BASE_URL", "http://localhost:3000");

        let bootstrap = BootstrapAdmin::from_env()?;
        let media = MediaConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            bootstrap,
            media,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BootstrapAdmin {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_email = get_env_or_default("STOREROOM_BOOTSTRAP_EMAIL", "admin@example.com");
        let email = Email::parse(&raw_email).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREROOM_BOOTSTRAP_EMAIL".to_owned(), e.to_string())
        })?;

        Ok(Self {
            name: get_env_or_default("STOREROOM_BOOTSTRAP_NAME", "Demo Admin"),
            email,
            password: SecretString::from(get_env_or_default(
                "STOREROOM_BOOTSTRAP_PASSWORD",
                "AdmiN_7788!@#",
            )),
        })
    }
}

impl MediaConfig {
    fn from_env() -> Option<Self> {
        let upload_url = get_optional_env("MEDIA_UPLOAD_URL")?;
        let api_key = get_optional_env("MEDIA_UPLOAD_KEY")?;

        Some(Self {
            upload_url,
            api_key: SecretString::from(api_key),
            folder: get_env_or_default("MEDIA_UPLOAD_FOLDER", "storeroom-products"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
