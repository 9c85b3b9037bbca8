//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::products::records::{ProductId, ProductRecord};

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at_utc: Timestamp,
    pub updated_at_utc: Option<Timestamp>,
    pub is_deleted: bool,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            sku: record.sku,
            name: record.name,
            description: record.description,
            price: record.price,
            created_at_utc: record.created_at_utc,
            updated_at_utc: record.updated_at_utc,
            is_deleted: record.is_deleted,
        }
    }
}

/// Result of a create or update that reached the store.
///
/// A failed outcome reports a business-rule rejection such as a duplicate SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
    pub product_id: Option<ProductId>,
}

impl MutationOutcome {
    #[must_use]
    pub fn succeeded(product_id: ProductId, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            product_id: Some(product_id),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            product_id: None,
        }
    }
}
