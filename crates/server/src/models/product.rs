//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storeroom_core::ProductId;

use super::ValidationError;

/// Maximum length of a product name.
pub const MAX_NAME_LENGTH: usize = 60;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID (opaque string; store-assigned).
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Units on hand. Never negative.
    pub stock: i32,
    pub category: String,
    /// Ordered image URLs, possibly empty.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Merge a partial patch over this product.
    ///
    /// Identity and timestamps are untouched; the caller refreshes
    /// `updated_at` after a successful merge.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = &patch.category {
            self.category.clone_from(category);
        }
        if let Some(images) = &patch.images {
            self.images.clone_from(images);
        }
    }
}

/// Inbound payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewProduct {
    /// Validate the payload against the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice);
        }
        if self.stock < 0 {
            return Err(ValidationError::NegativeStock);
        }
        Ok(())
    }
}

/// Inbound payload for a partial product update.
///
/// Unknown keys (including an `id` the client echoes back) are ignored on
/// deserialization: identity is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    /// Re-apply the catalog invariants to every provided field.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description
            && description.trim().is_empty()
        {
            return Err(ValidationError::EmptyDescription);
        }
        if let Some(category) = &self.category
            && category.trim().is_empty()
        {
            return Err(ValidationError::EmptyCategory);
        }
        if let Some(price) = self.price
            && price < Decimal::ZERO
        {
            return Err(ValidationError::NegativePrice);
        }
        if let Some(stock) = self.stock
            && stock < 0
        {
            return Err(ValidationError::NegativeStock);
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewProduct {
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
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut input = valid_input();
        input.name = "   ".to_owned();
        assert_eq!(input.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn overlong_name_rejected() {
        let mut input = valid_input();
        input.name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(input.validate(), Err(ValidationError::NameTooLong));
    }

    #[test]
    fn name_at_limit_accepted() {
        let mut input = valid_input();
        input.name = "x".repeat(MAX_NAME_LENGTH);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn negative_price_rejected() {
        let mut input = valid_input();
        input.price = Decimal::from(-1);
        assert_eq!(input.validate(), Err(ValidationError::NegativePrice));
    }

    #[test]
    fn negative_stock_rejected() {
        let mut input = valid_input();
        input.stock = -1;
        assert_eq!(input.validate(), Err(ValidationError::NegativeStock));
    }

    #[test]
    fn patch_validates_only_provided_fields() {
        let patch = ProductPatch {
            stock: Some(7),
            ..ProductPatch::default()
        };
        assert!(patch.validate().is_ok());

        let patch = ProductPatch {
            name: Some(String::new()),
            ..ProductPatch::default()
        };
        assert_eq!(patch.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn patch_deserialization_ignores_identity_field() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"id":"evil","name":"Renamed"}"#).expect("deserialize");
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn apply_patch_merges_partial_fields() {
        let mut product = Product {
            id: ProductId::new("prd-001"),
            name: "Old".to_owned(),
            description: "desc".to_owned(),
            price: Decimal::from(100),
            stock: 3,
            category: "cat".to_owned(),
            images: vec!["a.jpg".to_owned()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        product.apply_patch(&ProductPatch {
            name: Some("New".to_owned()),
            stock: Some(9),
            ..ProductPatch::default()
        });

        assert_eq!(product.name, "New");
        assert_eq!(product.stock, 9);
        assert_eq!(product.description, "desc");
        assert_eq!(product.id, ProductId::new("prd-001"));
    }
}
