//! CLI command implementations.

pub mod admin;
pub mod migrate;

use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0}")]
    Invalid(String),
}

/// Connect to the database named by `STOREROOM_DATABASE_URL` (or the generic
/// `DATABASE_URL`).
///
/// Unlike the server this connects eagerly: a CLI command against a dead
/// database should fail immediately, not lazily.
pub async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("STOREROOM_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("STOREROOM_DATABASE_URL"))?;

    Ok(PgPool::connect(&database_url).await?)
}
