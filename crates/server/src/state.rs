//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db::{OrderRepository, ProductRepository};
use crate::mock::MockStore;
use crate::services::{MediaClient, OrderService, ProductCatalog};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; wires the Postgres repositories and the mock
/// store into the resilient facades once at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: PgPool,
    mock: MockStore,
    catalog: ProductCatalog,
    orders: OrderService,
    media: Option<MediaClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `pool` - Lazy `PostgreSQL` connection pool
    /// * `mock` - The (seeded) mock store backing the fallback paths
    #[must_use]
    pub fn new(config: AppConfig, pool: PgPool, mock: MockStore) -> Self {
        let catalog = ProductCatalog::new(
            Arc::new(ProductRepository::new(pool.clone())),
            mock.clone(),
        );
        let orders = OrderService::new(Arc::new(OrderRepository::new(pool.clone())), mock.clone());
        let media = config.media.as_ref().map(MediaClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                mock,
                catalog,
                orders,
                media,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the mock store.
    #[must_use]
    pub fn mock(&self) -> &MockStore {
        &self.inner.mock
    }

    /// Get a reference to the resilient product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the resilient order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Get the media host client, if one is configured.
    #[must_use]
    pub fn media(&self) -> Option<&MediaClient> {
        self.inner.media.as_ref()
    }
}
