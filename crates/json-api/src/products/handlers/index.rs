//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error, requests::ProductListQuery, responses::ProductResponse,
    },
    state::State,
};

/// Product Index Handler
///
/// Lists products ordered by id.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("api_key" = []))
)]
pub(crate) async fn handler(
    filters: ProductListQuery,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .products
        .list_products(filters.into_product_query())
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, RepositoryError, query::ProductQuery,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_uses_default_query() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| *query == ProductQuery::default())
            .return_once(|_| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_query_parameters() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| {
                *query
                    == ProductQuery {
                        search: Some("wid".to_owned()),
                        page: 2,
                        page_size: 5,
                        include_deleted: true,
                    }
            })
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get(
            "http://example.com/products?search=wid&page=2&pageSize=5&includeDeleted=true",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unparsable_paging_falls_back() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|query| *query == ProductQuery::default())
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get(
            "http://example.com/products?page=first&pageSize=lots&includeDeleted=maybe",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_renders_camel_case_products() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|_| Ok(vec![make_product(1), make_product(2)]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;
        let first = body.get(0).ok_or("expected a product")?;

        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(first.get("id").and_then(serde_json::Value::as_i64), Some(1));
        assert_eq!(
            first.get("price").map(ToString::to_string).as_deref(),
            Some("19.99")
        );
        assert_eq!(
            first.get("createdAtUtc").and_then(serde_json::Value::as_str),
            Some("1970-01-01T00:00:00Z")
        );
        assert_eq!(
            first.get("isDeleted").and_then(serde_json::Value::as_bool),
            Some(false)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|_| {
            Err(ProductsServiceError::Storage(
                RepositoryError::constraint_violation("products_price_positive"),
            ))
        });

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
