//! Product Requests

use rust_decimal::Decimal;
use salvo::oapi::{ToParameters, ToSchema};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::data::{NewProduct, ProductUpdate};

/// Product create/update payload.
///
/// Missing fields deserialize to empty values and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ProductRequest {
    /// Display name, at most 100 characters
    pub name: String,

    /// Stock keeping unit, unique across all products
    pub sku: String,

    /// Optional free text
    pub description: Option<String>,

    /// Unit price, greater than zero
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

/// Product list filters.
///
/// Values are taken as text; ones that do not parse fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(rename_all = "camelCase", default_parameter_in = Query))]
pub(crate) struct ProductListQuery {
    /// Substring of the name or SKU, ignoring case
    pub search: Option<String>,

    /// 1-based page number, defaults to 1
    pub page: Option<String>,

    /// Products per page, defaults to 10
    pub page_size: Option<String>,

    /// Include soft-deleted products, defaults to false
    pub include_deleted: Option<String>,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            sku: request.sku,
            description: request.description,
            price: request.price,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            sku: request.sku,
            description: request.description,
            price: request.price,
        }
    }
}
