//! Create Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use catalog_app::domain::products::data::NewProduct;

use crate::{
    errors::ApiError,
    extensions::*,
    observability::{MutationResult, record_product_mutation},
    products::{
        errors::{into_api_error, validation_error},
        handlers::set_location,
        requests::ProductRequest,
        responses::MutationResponse,
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate SKU"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(
        sku = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MutationResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = NewProduct::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("sku", tracing::field::display(&product.sku));

    product.validate().map_err(|errors| validation_error(&errors))?;

    let outcome = state
        .products
        .create_product(product)
        .await
        .map_err(into_api_error)?;

    let Some(id) = outcome.product_id.filter(|_| outcome.success) else {
        record_product_mutation("create", MutationResult::Rejected);

        return Err(ApiError::rejected(StatusCode::BAD_REQUEST, outcome.into()));
    };

    span.record("product_id", tracing::field::display(id));
    record_product_mutation("create", MutationResult::Applied);

    set_location(res, id)?;

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, models::MutationOutcome, records::ProductId,
    };

    use crate::{errors::ErrorResponse, test_helpers::products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    fn widget() -> serde_json::Value {
        json!({ "name": "Widget", "sku": "W-1", "description": "Blue", "price": 19.99 })
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Widget".to_owned(),
                    sku: "W-1".to_owned(),
                    description: Some("Blue".to_owned()),
                    price: Decimal::new(1999, 2),
                }
            })
            .return_once(|_| {
                Ok(MutationOutcome::succeeded(
                    ProductId::new(1),
                    "Product created successfully.",
                ))
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&widget())
            .send(&make_service(repo))
            .await;

        let body: MutationResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(location, Some("/products/1"));
        assert_eq!(
            body,
            MutationResponse {
                success: true,
                message: "Product created successfully.".to_owned(),
                id: Some(1),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_zero_price_returns_400_without_calling_service() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Widget", "sku": "W-1", "price": 0 }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.errors.get("price").map(Vec::as_slice),
            Some(["Price must be greater than 0.".to_owned()].as_slice())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_missing_fields_reports_each_field() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({}))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;
        let fields: Vec<&str> = body.errors.keys().map(String::as_str).collect();

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(fields, vec!["name", "price", "sku"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_sku_returns_400_with_outcome() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().once().return_once(|_| {
            Ok(MutationOutcome::failed(
                "A product with SKU 'W-1' already exists.",
            ))
        });

        let mut res = TestClient::post("http://example.com/products")
            .json(&widget())
            .send(&make_service(repo))
            .await;

        let body: MutationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.success);
        assert_eq!(body.id, None);
        assert_eq!(body.message, "A product with SKU 'W-1' already exists.");

        Ok(())
    }
}
