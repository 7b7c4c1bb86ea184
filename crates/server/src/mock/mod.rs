//! In-process mock store: the always-available fallback behind the facades.
//!
//! Holds products and orders in memory with the same logical shape as
//! persisted entities. Constructed explicitly (no lazy globals) and injected
//! through `AppState`; data lives for the process lifetime and resets on
//! restart, which is acceptable for a liveness fallback.
//!
//! Every operation takes its lock for the full duration, so single operations
//! are atomic; interleaving across concurrent requests happens only between
//! operations.

mod seed;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::RwLock;

use storeroom_core::{OrderId, OrderStatus, ProductId};

use crate::models::{NewProduct, Order, OrderDraft, Product, ProductPatch};

/// Shared in-memory store. Cheap to clone; clones see the same collections.
#[derive(Clone)]
pub struct MockStore {
    inner: Arc<MockStoreInner>,
}

struct MockStoreInner {
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
    // Monotonic tiebreaker so two creates in the same millisecond still get
    // distinct identifiers.
    id_counter: AtomicU64,
}

impl MockStore {
    /// Create a store seeded with the fixture catalog and order history.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(MockStoreInner {
                products: RwLock::new(seed::products()),
                orders: RwLock::new(seed::orders()),
                id_counter: AtomicU64::new(0),
            }),
        }
    }

    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(MockStoreInner {
                products: RwLock::new(Vec::new()),
                orders: RwLock::new(Vec::new()),
                id_counter: AtomicU64::new(0),
            }),
        }
    }

    /// Restore the seeded fixtures, discarding any accumulated writes.
    pub fn reset(&self) {
        *self.inner.products.write() = seed::products();
        *self.inner.orders.write() = seed::orders();
    }

    fn next_id(&self, prefix: &str) -> (String, u64) {
        let seq = self.inner.id_counter.fetch_add(1, Ordering::Relaxed);
        let millis = Utc::now().timestamp_millis();
        (format!("{prefix}-{millis}-{seq}"), seq)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// The full catalog, most recently created first.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.inner.products.read().clone()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.inner
            .products
            .read()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Insert a new product at the front of the catalog.
    ///
    /// Assigns a fresh id and timestamps and returns the stored entity.
    pub fn create_product(&self, input: NewProduct) -> Product {
        let (id, _) = self.next_id("mock");
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(id),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
            images: input.images,
            created_at: now,
            updated_at: now,
        };
        self.inner.products.write().insert(0, product.clone());
        product
    }

    /// Merge a partial patch over an existing product.
    ///
    /// Returns `None` if the id is unknown. The patch cannot change identity.
    pub fn update_product(&self, id: &ProductId, patch: &ProductPatch) -> Option<Product> {
        let mut products = self.inner.products.write();
        let product = products.iter_mut().find(|p| &p.id == id)?;
        product.apply_patch(patch);
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Remove a product. Returns `false` if the id is unknown.
    pub fn delete_product(&self, id: &ProductId) -> bool {
        let mut products = self.inner.products.write();
        let before = products.len();
        products.retain(|p| &p.id != id);
        products.len() < before
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// The full order history, most recently created first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.inner.orders.read().clone()
    }

    /// Look up an order by id or by its human-facing order reference.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.inner
            .orders
            .read()
            .iter()
            .find(|o| &o.id == id || o.order_number == id.as_str())
            .cloned()
    }

    /// Insert a new order at the front of the history.
    ///
    /// Assigns a fresh id, a unique order reference, and timestamps.
    pub fn create_order(&self, draft: OrderDraft) -> Order {
        let (id, seq) = self.next_id("ord");
        let now = Utc::now();
        let order = Order {
            id: OrderId::new(id),
            order_number: format!("ORD-{}-{:03}", now.timestamp_millis(), seq % 1000),
            customer: draft.customer,
            items: draft.items,
            total_amount: draft.total_amount,
            status: draft.status,
            payment_method: draft.payment_method,
            shipping_address: draft.shipping_address,
            created_at: now,
            updated_at: now,
        };
        self.inner.orders.write().insert(0, order.clone());
        order
    }

    /// Transition an order's status. Returns `None` if the id is unknown.
    pub fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Option<Order> {
        let mut orders = self.inner.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id || o.order_number == id.as_str())?;
        order.status = status;
        order.updated_at = Utc::now();
        Some(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

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

    #[test]
    fn seeded_store_has_fixture_content() {
        let store = MockStore::seeded();
        assert_eq!(store.products().len(), 5);
        assert_eq!(store.orders().len(), 8);
        assert!(store.product(&ProductId::new("prd-003")).is_some());
    }

    #[test]
    fn create_prepends_and_assigns_generated_fields() {
        let store = MockStore::seeded();
        let created = store.create_product(test_input());

        assert!(created.id.as_str().starts_with("mock-"));
        assert_eq!(created.created_at, created.updated_at);

        let products = store.products();
        assert_eq!(products.len(), 6);
        assert_eq!(products.first().map(|p| p.id.clone()), Some(created.id));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = MockStore::seeded();
        assert!(store.product(&ProductId::new("prd-999")).is_none());
    }

    #[test]
    fn update_unknown_id_is_none_not_error() {
        let store = MockStore::seeded();
        let patch = ProductPatch {
            stock: Some(1),
            ..ProductPatch::default()
        };
        assert!(store.update_product(&ProductId::new("missing"), &patch).is_none());
    }

    #[test]
    fn update_cannot_change_identity() {
        let store = MockStore::seeded();
        // A payload echoing an `id` key deserializes to a patch without one
        let patch: ProductPatch =
            serde_json::from_str(r#"{"id":"hijacked","stock":99}"#).expect("deserialize");

        let id = ProductId::new("prd-001");
        let updated = store.update_product(&id, &patch).expect("exists");
        assert_eq!(updated.id, id);
        assert_eq!(updated.stock, 99);
        assert!(store.product(&ProductId::new("hijacked")).is_none());
    }

    #[test]
    fn update_refreshes_updated_at_only() {
        let store = MockStore::seeded();
        let id = ProductId::new("prd-002");
        let before = store.product(&id).expect("exists");

        let patch = ProductPatch {
            name: Some("Renamed".to_owned()),
            ..ProductPatch::default()
        };
        let updated = store.update_product(&id, &patch).expect("exists");

        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at >= before.updated_at);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let store = MockStore::seeded();
        let id = ProductId::new("prd-004");

        assert!(store.delete_product(&id));
        assert_eq!(store.products().len(), 4);
        assert!(store.product(&id).is_none());

        // Deleting again reports absence
        assert!(!store.delete_product(&id));
    }

    #[test]
    fn delete_unknown_id_is_false() {
        let store = MockStore::seeded();
        assert!(!store.delete_product(&ProductId::new("nope")));
        assert_eq!(store.products().len(), 5);
    }

    #[test]
    fn reset_restores_seed_state() {
        let store = MockStore::seeded();
        store.create_product(test_input());
        store.delete_product(&ProductId::new("prd-001"));

        store.reset();

        assert_eq!(store.products().len(), 5);
        assert!(store.product(&ProductId::new("prd-001")).is_some());
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = MockStore::empty();

        // Hammer creates from many threads inside the same few milliseconds;
        // the sequence counter must keep every id unique.
        std::thread::scope(|scope| {
            for _ in 0..8 {
                let store = store.clone();
                scope.spawn(move || {
                    for _ in 0..50 {
                        store.create_product(test_input());
                    }
                });
            }
        });

        let ids: HashSet<String> = store
            .products()
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids.len(), 400);
    }

    #[test]
    fn create_order_assigns_identity_and_reference() {
        let store = MockStore::seeded();
        let draft = OrderDraft {
            customer: crate::models::Customer {
                name: "Test Customer".to_owned(),
                email: "test@example.com".to_owned(),
                avatar: None,
            },
            items: vec![crate::models::OrderItem {
                product_id: Some(ProductId::new("prd-001")),
                name: "Nike Air Max 270".to_owned(),
                quantity: 1,
                price: Decimal::from(12_900),
            }],
            total_amount: Decimal::from(12_900),
            status: OrderStatus::default(),
            payment_method: None,
            shipping_address: None,
        };

        let created = store.create_order(draft);
        assert!(created.id.as_str().starts_with("ord-"));
        assert!(created.order_number.starts_with("ORD-"));
        assert_eq!(created.status, OrderStatus::Pending);

        let orders = store.orders();
        assert_eq!(orders.len(), 9);
        assert_eq!(orders.first().map(|o| o.id.clone()), Some(created.id));
    }

    #[test]
    fn order_lookup_matches_either_identifier() {
        let store = MockStore::seeded();
        let by_id = store.order(&OrderId::new("ord-001")).expect("by id");
        let by_number = store
            .order(&OrderId::new("ORD-1767757582476-925"))
            .expect("by number");
        assert_eq!(by_id, by_number);
    }

    #[test]
    fn order_status_update_touches_timestamp() {
        let store = MockStore::seeded();
        let id = OrderId::new("ord-007");
        let updated = store
            .update_order_status(&id, OrderStatus::Shipped)
            .expect("exists");
        assert_eq!(updated.status, OrderStatus::Shipped);
        assert!(store
            .update_order_status(&OrderId::new("missing"), OrderStatus::Shipped)
            .is_none());
    }
}
