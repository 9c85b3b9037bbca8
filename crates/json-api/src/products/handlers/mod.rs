//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

use salvo::{http::header::LOCATION, prelude::Response};

use catalog_app::domain::products::records::ProductId;

use crate::{errors::ApiError, extensions::*};

fn set_location(res: &mut Response, product: ProductId) -> Result<(), ApiError> {
    res.add_header(LOCATION, format!("/products/{product}"), true)
        .or_500("failed to set location header")?;

    Ok(())
}
