//! Order repository for database operations.
//!
//! Line items and shipping addresses are stored as JSONB; status and payment
//! method are stored as snake_case text and re-parsed on read, with invalid
//! values reported as data corruption rather than panicking.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use storeroom_core::{OrderId, OrderStatus, PaymentMethod};

use super::{OrderStore, RepositoryError};
use crate::models::{Customer, Order, OrderItem, ShippingAddress};

/// Repository for order database operations.
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    order_number: String,
    customer_name: String,
    customer_email: String,
    customer_avatar: Option<String>,
    items: Json<Vec<OrderItem>>,
    total_amount: Decimal,
    status: String,
    payment_method: Option<String>,
    shipping_address: Option<Json<ShippingAddress>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_str(&row.status)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid status: {e}")))?;

        let payment_method = row
            .payment_method
            .as_deref()
            .map(PaymentMethod::from_str)
            .transpose()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid payment method: {e}")))?;

        Ok(Self {
            id: OrderId::new(row.id),
            order_number: row.order_number,
            customer: Customer {
                name: row.customer_name,
                email: row.customer_email,
                avatar: row.customer_avatar,
            },
            items: row.items.0,
            total_amount: row.total_amount,
            status,
            payment_method,
            shipping_address: row.shipping_address.map(|json| json.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const ORDER_COLUMNS: &str = r"
    id, order_number, customer_name, customer_email, customer_avatar,
    items, total_amount, status, payment_method, shipping_address,
    created_at, updated_at
";

impl OrderRepository {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 OR order_number = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            r"
            UPDATE orders
            SET status = $2, updated_at = now()
            WHERE id = $1 OR order_number = $1
            RETURNING {ORDER_COLUMNS}
            "
        ))
        .bind(id.as_str())
        .bind(status.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }
}
