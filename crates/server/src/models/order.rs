//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storeroom_core::{OrderId, OrderStatus, PaymentMethod, ProductId};

use super::ValidationError;

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID (opaque string; store-assigned).
    pub id: OrderId,
    /// Human-facing order reference, unique per store.
    #[serde(rename = "orderId")]
    pub order_number: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The customer an order was placed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A single line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub name: String,
    /// Always greater than zero.
    pub quantity: u32,
    pub price: Decimal,
}

/// Optional structured shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// An order before the store assigns identity and timestamps.
///
/// Used for seeding the mock store and by its create operation; the public
/// API does not create orders (they arrive from the storefront).
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_method: Option<PaymentMethod>,
    pub shipping_address: Option<ShippingAddress>,
}

impl OrderDraft {
    /// Validate the draft's line items.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveQuantity`] if any line has a
    /// zero quantity.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(ValidationError::NonPositiveQuantity);
        }
        Ok(())
    }
}

/// Inbound payload for a status transition.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
