//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use catalog_app::domain::products::{data::ProductUpdate, records::ProductId};

use crate::{
    errors::ApiError,
    extensions::*,
    observability::{MutationResult, record_product_mutation},
    products::{
        errors::{PRODUCT_NOT_FOUND, into_api_error, validation_error},
        handlers::set_location,
        requests::ProductRequest,
        responses::MutationResponse,
    },
    state::State,
};

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate SKU"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot, res),
    fields(
        product_id = tracing::field::Empty,
        sku = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MutationResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::new(id.into_inner());
    let update = ProductUpdate::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("sku", tracing::field::display(&update.sku));

    update.validate().map_err(|errors| validation_error(&errors))?;

    let outcome = state
        .products
        .update_product(product, update)
        .await
        .map_err(into_api_error)?
        .ok_or_else(|| {
            record_product_mutation("update", MutationResult::NotFound);

            ApiError::not_found(PRODUCT_NOT_FOUND)
        })?;

    if !outcome.success {
        record_product_mutation("update", MutationResult::Rejected);

        return Err(ApiError::rejected(StatusCode::BAD_REQUEST, outcome.into()));
    }

    record_product_mutation("update", MutationResult::Applied);

    set_location(res, product)?;

    Ok(Json(outcome.into()))
}
