//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    observability::{MutationResult, record_product_mutation},
    products::{
        errors::{PRODUCT_NOT_FOUND, into_api_error},
        responses::MutationResponse,
    },
    state::State,
};

const DELETED_MESSAGE: &str = "Product deleted successfully.";

/// Delete Product Handler
///
/// Soft-deletes a product. Deleting an already deleted product succeeds again.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<MutationResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::new(id.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(product));

    let deleted = state
        .products
        .soft_delete_product(product)
        .await
        .map_err(into_api_error)?;

    if !deleted {
        record_product_mutation("delete", MutationResult::NotFound);

        return Err(ApiError::rejected(
            StatusCode::NOT_FOUND,
            MutationResponse {
                success: false,
                message: PRODUCT_NOT_FOUND.to_owned(),
                id: None,
            },
        ));
    }

    record_product_mutation("delete", MutationResult::Applied);

    Ok(Json(MutationResponse {
        success: true,
        message: DELETED_MESSAGE.to_owned(),
        id: Some(product.into_inner()),
    }))
}
