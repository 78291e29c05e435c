//! Product data model and API request/response types.
//!
//! This module defines:
//! - `Product`: Database entity representing an inventory item
//! - `CreateProductRequest` / `UpdateProductRequest`: Request bodies
//! - `ProductResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents a product record from the database.
///
/// # Database Table
///
/// Maps to the `products` table. Each product:
/// - Belongs to one business (via `business_id`)
/// - Has a unit price stored in cents (to avoid floating-point errors)
///
/// # Price Storage
///
/// Prices are stored as `i64` cents. For example, Rs 10.50 is stored
/// as 1050 cents.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Product {
    /// Unique identifier for this product
    pub id: Uuid,

    /// Business that owns this product
    ///
    /// Every query filters by `business_id` so one business can never
    /// see or touch another's inventory.
    pub business_id: Uuid,

    /// Human-readable product name
    pub name: String,

    /// Product category (e.g. "Spare Parts", "Raw Material")
    pub category: String,

    /// Units in stock, never negative
    pub quantity: i64,

    /// Unit price in cents
    pub unit_price_cents: i64,

    /// Timestamp when the product was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new product.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Oil Filter",
///   "category": "Spare Parts",
///   "quantity": 10,
///   "unit_price_cents": 50000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,

    #[serde(default = "default_category")]
    pub category: String,

    pub quantity: i64,

    pub unit_price_cents: i64,
}

fn default_category() -> String {
    "General".to_string()
}

impl CreateProductRequest {
    /// Validate the creation payload before anything is written.
    ///
    /// Rules: name non-blank, quantity >= 0, unit price >= 0.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Product name must not be empty".to_string(),
            ));
        }
        if self.quantity < 0 {
            return Err(AppError::InvalidRequest(
                "Quantity must not be negative".to_string(),
            ));
        }
        if self.unit_price_cents < 0 {
            return Err(AppError::InvalidRequest(
                "Unit price must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for a product. Absent fields are left unchanged.
///
/// # JSON Example
///
/// ```json
/// {
///   "quantity": 8
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price_cents: Option<i64>,
}

impl UpdateProductRequest {
    /// Validate the patch: present fields follow the creation rules,
    /// and at least one field must be present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.unit_price_cents.is_none()
        {
            return Err(AppError::InvalidRequest(
                "Update must change at least one field".to_string(),
            ));
        }
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(AppError::InvalidRequest(
                    "Product name must not be empty".to_string(),
                ));
            }
        }
        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                return Err(AppError::InvalidRequest(
                    "Quantity must not be negative".to_string(),
                ));
            }
        }
        if let Some(price) = self.unit_price_cents {
            if price < 0 {
                return Err(AppError::InvalidRequest(
                    "Unit price must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Response body for product endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Oil Filter",
///   "category": "Spare Parts",
///   "quantity": 10,
///   "unit_price_cents": 50000,
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database Product to API ProductResponse.
///
/// Removes the internal `business_id` field.
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            unit_price_cents: product.unit_price_cents,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateProductRequest {
        CreateProductRequest {
            name: "Oil Filter".to_string(),
            category: "Spare Parts".to_string(),
            quantity: 10,
            unit_price_cents: 50000,
        }
    }

    #[test]
    fn create_accepts_valid_payload() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut request = valid_create();
        request.name = "  ".to_string();
        assert!(matches!(
            request.validate(),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn create_rejects_negative_quantity() {
        let mut request = valid_create();
        request.quantity = -1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_rejects_negative_price() {
        let mut request = valid_create();
        request.unit_price_cents = -500;
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_accepts_zero_quantity() {
        // Out of stock is a legal state
        let mut request = valid_create();
        request.quantity = 0;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn update_rejects_empty_patch() {
        let patch = UpdateProductRequest {
            name: None,
            category: None,
            quantity: None,
            unit_price_cents: None,
        };
        assert!(matches!(patch.validate(), Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn update_rejects_negative_quantity() {
        let patch = UpdateProductRequest {
            name: None,
            category: None,
            quantity: Some(-3),
            unit_price_cents: None,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn update_accepts_single_field_patch() {
        let patch = UpdateProductRequest {
            name: None,
            category: None,
            quantity: Some(8),
            unit_price_cents: None,
        };
        assert!(patch.validate().is_ok());
    }
}
