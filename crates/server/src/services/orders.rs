//! Resilient order facade.
//!
//! Orders take the same primary-then-fallback shape as the catalog on reads,
//! but writes never fall back: an order is a financial record, and silently
//! demoting one to volatile storage would lose it on restart. A failed status
//! update surfaces the store error instead.

use std::sync::Arc;

use thiserror::Error;

use storeroom_core::{OrderId, OrderStatus};

use super::Served;
use crate::db::{OrderStore, RepositoryError};
use crate::mock::MockStore;
use crate::models::Order;

/// Errors surfaced by order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Order absent from the consulted store(s).
    #[error("order not found")]
    NotFound,

    /// The persistent store rejected or could not serve a write.
    #[error("order store unavailable: {0}")]
    Unavailable(#[from] RepositoryError),
}

/// Resilient facade over the order stores.
pub struct OrderService {
    primary: Arc<dyn OrderStore>,
    fallback: MockStore,
}

impl OrderService {
    /// Create an order service over an injected primary store and mock fallback.
    #[must_use]
    pub fn new(primary: Arc<dyn OrderStore>, fallback: MockStore) -> Self {
        Self { primary, fallback }
    }

    /// List orders, most recently created first. Never fails.
    pub async fn list(&self) -> Served<Vec<Order>> {
        match self.primary.list().await {
            Ok(orders) => Served::primary(orders),
            Err(err) => {
                tracing::warn!(error = %err, "order list failed, serving mock data");
                Served::fallback(self.fallback.orders())
            }
        }
    }

    /// Look up an order by id or order reference.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] if the order is absent. A confirmed
    /// negative from the primary is authoritative.
    pub async fn get(&self, id: &OrderId) -> Result<Served<Order>, OrderError> {
        match self.primary.get(id).await {
            Ok(Some(order)) => Ok(Served::primary(order)),
            Ok(None) => Err(OrderError::NotFound),
            Err(err) => {
                tracing::warn!(error = %err, order_id = %id, "order get failed, trying mock store");
                self.fallback
                    .order(id)
                    .map(Served::fallback)
                    .ok_or(OrderError::NotFound)
            }
        }
    }

    /// Transition an order's status in the persistent store.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown order and
    /// [`OrderError::Unavailable`] when the store cannot take the write —
    /// status changes are not demoted to the mock store.
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        match self.primary.update_status(id, status).await {
            Ok(Some(order)) => Ok(order),
            Ok(None) => Err(OrderError::NotFound),
            Err(err) => {
                tracing::error!(error = %err, order_id = %id, "order status update failed");
                Err(OrderError::Unavailable(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct DeadPrimary;

    fn unreachable_err() -> RepositoryError {
        RepositoryError::Database(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl OrderStore for DeadPrimary {
        async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
            Err(unreachable_err())
        }

        async fn get(&self, _id: &OrderId) -> Result<Option<Order>, RepositoryError> {
            Err(unreachable_err())
        }

        async fn update_status(
            &self,
            _id: &OrderId,
            _status: OrderStatus,
        ) -> Result<Option<Order>, RepositoryError> {
            Err(unreachable_err())
        }
    }

    /// Primary that is reachable but holds no orders.
    struct EmptyPrimary;

    #[async_trait]
    impl OrderStore for EmptyPrimary {
        async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn get(&self, _id: &OrderId) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }

        async fn update_status(
            &self,
            _id: &OrderId,
            _status: OrderStatus,
        ) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn dead_primary_reads_fall_back() {
        let service = OrderService::new(Arc::new(DeadPrimary), MockStore::seeded());

        let listed = service.list().await;
        assert!(listed.origin.is_fallback());
        assert_eq!(listed.data.len(), 8);

        let fetched = service.get(&OrderId::new("ord-001")).await.expect("get");
        assert!(fetched.origin.is_fallback());
    }

    #[tokio::test]
    async fn dead_primary_status_write_surfaces_error() {
        let service = OrderService::new(Arc::new(DeadPrimary), MockStore::seeded());

        let result = service
            .update_status(&OrderId::new("ord-001"), OrderStatus::Shipped)
            .await;
        assert!(matches!(result, Err(OrderError::Unavailable(_))));

        // The mock store was not touched
        let order = service.get(&OrderId::new("ord-001")).await.expect("get");
        assert_eq!(order.data.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn confirmed_negative_is_authoritative() {
        let service = OrderService::new(Arc::new(EmptyPrimary), MockStore::seeded());

        let result = service.get(&OrderId::new("ord-001")).await;
        assert!(matches!(result, Err(OrderError::NotFound)));

        let update = service
            .update_status(&OrderId::new("ord-001"), OrderStatus::Shipped)
            .await;
        assert!(matches!(update, Err(OrderError::NotFound)));
    }
}
