//! Resilient product catalog facade.
//!
//! Presents one CRUD surface for products that survives the persistent store
//! being unreachable. Every operation attempts the primary store exactly once
//! and, on failure, routes the same operation to the mock store — no retries,
//! no backoff; this is a liveness fallback, not a durability mechanism.
//!
//! Catalog data is non-critical, so the fallback covers writes as well as
//! reads: an edit made during an outage succeeds (with a warning) instead of
//! erroring, and is lost on restart.

use std::sync::Arc;

use thiserror::Error;

use storeroom_core::ProductId;

use super::{Origin, Served};
use crate::db::ProductStore;
use crate::mock::MockStore;
use crate::models::{NewProduct, Product, ProductPatch, ValidationError};

/// Errors surfaced by catalog operations.
///
/// Store unavailability never appears here — that is what the fallback
/// absorbs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product absent from the consulted store(s).
    #[error("product not found")]
    NotFound,

    /// Inbound payload violated a catalog invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Resilient facade over the product stores.
pub struct ProductCatalog {
    primary: Arc<dyn ProductStore>,
    fallback: MockStore,
}

impl ProductCatalog {
    /// Create a catalog over an injected primary store and mock fallback.
    #[must_use]
    pub fn new(primary: Arc<dyn ProductStore>, fallback: MockStore) -> Self {
        Self { primary, fallback }
    }

    /// List the catalog, most recently created first.
    ///
    /// Never fails: a dead primary yields the mock store's content, flagged
    /// as fallback; an empty catalog yields an empty list.
    pub async fn list(&self) -> Served<Vec<Product>> {
        match self.primary.list().await {
            Ok(products) => Served::primary(products),
            Err(err) => {
                tracing::warn!(error = %err, "product list failed, serving mock data");
                Served::fallback(self.fallback.products())
            }
        }
    }

    /// Look up a product by id.
    ///
    /// A confirmed negative from the primary is authoritative: the mock store
    /// is consulted only when the primary itself is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the product is absent.
    pub async fn get(&self, id: &ProductId) -> Result<Served<Product>, CatalogError> {
        match self.primary.get(id).await {
            Ok(Some(product)) => Ok(Served::primary(product)),
            Ok(None) => Err(CatalogError::NotFound),
            Err(err) => {
                tracing::warn!(error = %err, product_id = %id, "product get failed, trying mock store");
                self.fallback
                    .product(id)
                    .map(Served::fallback)
                    .ok_or(CatalogError::NotFound)
            }
        }
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the payload violates an
    /// invariant. Store failure does not error: the create lands in the mock
    /// store instead.
    pub async fn create(&self, input: NewProduct) -> Result<Served<Product>, CatalogError> {
        input.validate()?;

        match self.primary.create(&input).await {
            Ok(product) => Ok(Served::primary(product)),
            Err(err) => {
                tracing::warn!(error = %err, "product create failed, writing to mock store");
                Ok(Served::fallback(self.fallback.create_product(input)))
            }
        }
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] on an invalid patch and
    /// [`CatalogError::NotFound`] if the id is unknown to the consulted
    /// store(s).
    pub async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Served<Product>, CatalogError> {
        patch.validate()?;

        match self.primary.update(id, &patch).await {
            Ok(Some(product)) => Ok(Served::primary(product)),
            Ok(None) => Err(CatalogError::NotFound),
            Err(err) => {
                tracing::warn!(error = %err, product_id = %id, "product update failed, updating mock store");
                self.fallback
                    .update_product(id, &patch)
                    .map(Served::fallback)
                    .ok_or(CatalogError::NotFound)
            }
        }
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the id is unknown to the
    /// consulted store(s).
    pub async fn delete(&self, id: &ProductId) -> Result<Origin, CatalogError> {
        match self.primary.delete(id).await {
            Ok(true) => Ok(Origin::Primary),
            Ok(false) => Err(CatalogError::NotFound),
            Err(err) => {
                tracing::warn!(error = %err, product_id = %id, "product delete failed, deleting from mock store");
                if self.fallback.delete_product(id) {
                    Ok(Origin::Fallback)
                } else {
                    Err(CatalogError::NotFound)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::Mutex;
    use rust_decimal::Decimal;

    use crate::db::RepositoryError;

    /// Healthy primary double backed by a plain Vec.
    #[derive(Default)]
    struct InMemoryPrimary {
        products: Mutex<Vec<Product>>,
        counter: Mutex<u64>,
    }

    #[async_trait]
    impl ProductStore for InMemoryPrimary {
        async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(self.products.lock().clone())
        }

        async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
            Ok(self.products.lock().iter().find(|p| &p.id == id).cloned())
        }

        async fn create(&self, input: &NewProduct) -> Result<Product, RepositoryError> {
            let mut counter = self.counter.lock();
            *counter += 1;
            let now = Utc::now();
            let product = Product {
                id: ProductId::new(format!("prd-{counter}")),
                name: input.name.clone(),
                description: input.description.clone(),
                price: input.price,
                stock: input.stock,
                category: input.category.clone(),
                images: input.images.clone(),
                created_at: now,
                updated_at: now,
            };
            self.products.lock().insert(0, product.clone());
            Ok(product)
        }

        async fn update(
            &self,
            id: &ProductId,
            patch: &ProductPatch,
        ) -> Result<Option<Product>, RepositoryError> {
            let mut products = self.products.lock();
            let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
                return Ok(None);
            };
            product.apply_patch(patch);
            product.updated_at = Utc::now();
            Ok(Some(product.clone()))
        }

        async fn delete(&self, id: &ProductId) -> Result<bool, RepositoryError> {
            let mut products = self.products.lock();
            let before = products.len();
            products.retain(|p| &p.id != id);
            Ok(products.len() < before)
        }
    }

    /// Primary double whose every operation reports the store unreachable.
    struct DeadPrimary;

    fn unreachable_err() -> RepositoryError {
        RepositoryError::Database(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl ProductStore for DeadPrimary {
        async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
            Err(unreachable_err())
        }

        async fn get(&self, _id: &ProductId) -> Result<Option<Product>, RepositoryError> {
            Err(unreachable_err())
        }

        async fn create(&self, _input: &NewProduct) -> Result<Product, RepositoryError> {
            Err(unreachable_err())
        }

        async fn update(
            &self,
            _id: &ProductId,
            _patch: &ProductPatch,
        ) -> Result<Option<Product>, RepositoryError> {
            Err(unreachable_err())
        }

        async fn delete(&self, _id: &ProductId) -> Result<bool, RepositoryError> {
            Err(unreachable_err())
        }
    }

    fn test_input() -> NewProduct {
        NewProduct {
            name: "Test".to_owned(),
            description: "d".to_owned(),
            price: Decimal::from(10),
            stock: 2,
            category: "c".to_owned(),
            images: vec![],
        }
    }

    fn healthy_catalog() -> ProductCatalog {
        ProductCatalog::new(Arc::new(InMemoryPrimary::default()), MockStore::empty())
    }

    fn degraded_catalog() -> ProductCatalog {
        ProductCatalog::new(Arc::new(DeadPrimary), MockStore::seeded())
    }

    #[tokio::test]
    async fn healthy_create_then_get_round_trips() {
        let catalog = healthy_catalog();

        let created = catalog.create(test_input()).await.expect("create");
        assert_eq!(created.origin, Origin::Primary);

        let fetched = catalog.get(&created.data.id).await.expect("get");
        assert_eq!(fetched.origin, Origin::Primary);
        assert_eq!(fetched.data, created.data);
    }

    #[tokio::test]
    async fn dead_primary_list_serves_seeded_mock_with_flag() {
        let catalog = degraded_catalog();

        let served = catalog.list().await;
        assert_eq!(served.origin, Origin::Fallback);
        assert_eq!(served.data.len(), 5);
    }

    #[tokio::test]
    async fn healthy_empty_list_is_empty_not_fallback() {
        let catalog = healthy_catalog();

        let served = catalog.list().await;
        assert_eq!(served.origin, Origin::Primary);
        assert!(served.data.is_empty());
    }

    #[tokio::test]
    async fn confirmed_negative_skips_mock_store() {
        // The mock store knows prd-001, but the healthy primary's "not found"
        // is authoritative.
        let catalog =
            ProductCatalog::new(Arc::new(InMemoryPrimary::default()), MockStore::seeded());

        let result = catalog.get(&ProductId::new("prd-001")).await;
        assert!(matches!(result, Err(CatalogError::NotFound)));
    }

    #[tokio::test]
    async fn dead_primary_get_consults_mock_store() {
        let catalog = degraded_catalog();

        let served = catalog.get(&ProductId::new("prd-001")).await.expect("get");
        assert_eq!(served.origin, Origin::Fallback);
        assert_eq!(served.data.name, "Nike Air Max 270");

        let missing = catalog.get(&ProductId::new("prd-999")).await;
        assert!(matches!(missing, Err(CatalogError::NotFound)));
    }

    #[tokio::test]
    async fn dead_primary_create_lands_in_mock_store() {
        let catalog = degraded_catalog();

        let created = catalog.create(test_input()).await.expect("create");
        assert_eq!(created.origin, Origin::Fallback);

        // Visible through a subsequent fallback read
        let listed = catalog.list().await;
        assert_eq!(listed.data.len(), 6);
        assert_eq!(listed.data.first(), Some(&created.data));
    }

    #[tokio::test]
    async fn invalid_input_rejected_before_any_store() {
        let catalog = degraded_catalog();

        let mut input = test_input();
        input.price = Decimal::from(-5);
        let result = catalog.create(input).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        // Nothing landed in the fallback
        assert_eq!(catalog.list().await.data.len(), 5);
    }

    #[tokio::test]
    async fn dead_primary_update_and_delete_fall_back() {
        let catalog = degraded_catalog();
        let id = ProductId::new("prd-002");

        let patch = ProductPatch {
            stock: Some(42),
            ..ProductPatch::default()
        };
        let updated = catalog.update(&id, patch).await.expect("update");
        assert_eq!(updated.origin, Origin::Fallback);
        assert_eq!(updated.data.stock, 42);

        let origin = catalog.delete(&id).await.expect("delete");
        assert_eq!(origin, Origin::Fallback);

        let gone = catalog.get(&id).await;
        assert!(matches!(gone, Err(CatalogError::NotFound)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_everywhere() {
        let id = ProductId::new("missing");
        let patch = ProductPatch::default();

        let healthy = healthy_catalog();
        assert!(matches!(
            healthy.update(&id, patch.clone()).await,
            Err(CatalogError::NotFound)
        ));

        let degraded = degraded_catalog();
        assert!(matches!(
            degraded.update(&id, patch).await,
            Err(CatalogError::NotFound)
        ));
    }
}
