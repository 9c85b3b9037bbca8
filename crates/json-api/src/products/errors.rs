//! Product Errors

use tracing::error;

use catalog_app::domain::products::{ProductsServiceError, data::ValidationErrors};

use crate::errors::ApiError;

pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found.";

pub(crate) fn validation_error(errors: &ValidationErrors) -> ApiError {
    ApiError::validation(errors.iter())
}

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::InvalidData(errors) => validation_error(&errors),
        ProductsServiceError::Storage(source) => {
            error!("product storage failure: {source:?}");

            ApiError::internal()
        }
    }
}
