//! Database operations for the Storeroom `PostgreSQL` instance.
//!
//! ## Tables
//!
//! - `products` - Catalog entries
//! - `orders` - Order history (line items and addresses as JSONB)
//! - `users` - Admin accounts (password hashes never leave this module
//!   except through `UserRepository::get_with_password`)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p storeroom-cli -- migrate
//! ```
//!
//! # Availability
//!
//! The pool is created lazily: the process starts even when the database is
//! down, and connection errors surface per-operation where the resilient
//! facades catch them.

pub mod orders;
pub mod products;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use storeroom_core::{OrderId, OrderStatus, ProductId};

use crate::models::{NewProduct, Order, Product, ProductPatch};

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Primary store contract for products.
///
/// `Ok(None)` from a lookup is a confirmed negative; `Err` means the store
/// was unavailable. The facade branches on exactly those three outcomes.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn create(&self, input: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<bool, RepositoryError>;
}

/// Primary store contract for orders.
///
/// Same tri-state convention as [`ProductStore`].
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool connects lazily; a dead database is only observed when an
/// operation runs, not at startup.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
pub fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url.expose_secret())
}
