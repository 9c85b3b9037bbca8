//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{PRODUCT_NOT_FOUND, into_api_error},
        responses::ProductResponse,
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a product, including soft-deleted ones.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("api_key" = []))
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .products
        .get_product(ProductId::new(id.into_inner()))
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| ApiError::not_found(PRODUCT_NOT_FOUND))?;

    Ok(Json(product.into()))
}
