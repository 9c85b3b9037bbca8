//! Product Responses

use std::string::ToString;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::{MutationOutcome, Product};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,

    pub sku: String,

    pub name: String,

    pub description: Option<String>,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Creation time (RFC 3339)
    pub created_at_utc: String,

    /// Last update time (RFC 3339)
    pub updated_at_utc: Option<String>,

    pub is_deleted: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_inner(),
            sku: product.sku,
            name: product.name,
            description: product.description,
            price: product.price,
            created_at_utc: product.created_at_utc.to_string(),
            updated_at_utc: product.updated_at_utc.as_ref().map(ToString::to_string),
            is_deleted: product.is_deleted,
        }
    }
}

/// Result of a create, update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MutationResponse {
    pub success: bool,

    pub message: String,

    /// Affected product, when the mutation succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl From<MutationOutcome> for MutationResponse {
    fn from(outcome: MutationOutcome) -> Self {
        MutationResponse {
            success: outcome.success,
            message: outcome.message,
            id: outcome.product_id.map(Into::into),
        }
    }
}
