//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    auth::{ApiSecret, MockAuthService, SharedSecretAuthService},
    context::AppContext,
    domain::products::{
        MockProductsService, PgProductsService, models::Product, records::ProductId,
    },
    testing::InMemoryProductsRepository,
};

use crate::{router, state::State};

pub(crate) const TEST_SECRET: &str = "test-secret";

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_soft_delete_product().never();

    products
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(products),
        Arc::new(strict_auth_mock()),
    ))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    State::from_app_context(AppContext::new(
        Arc::new(strict_products_mock()),
        Arc::new(auth),
    ))
}

/// Mount `route` behind injected state, skipping the access gate.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

/// The full application router over an in-memory store and [`TEST_SECRET`].
pub(crate) fn catalog_service() -> Service {
    let Ok(secret) = ApiSecret::new(TEST_SECRET) else {
        unreachable!("test secret is not empty");
    };

    let app = AppContext::new(
        Arc::new(PgProductsService::from_repository(Arc::new(
            InMemoryProductsRepository::new(),
        ))),
        Arc::new(SharedSecretAuthService::new(secret)),
    );

    router::service(State::from_app_context(app))
}

pub(crate) fn make_product(id: i64) -> Product {
    Product {
        id: ProductId::new(id),
        sku: format!("SKU-{id}"),
        name: format!("Product {id}"),
        description: None,
        price: Decimal::new(1999, 2),
        created_at_utc: Timestamp::UNIX_EPOCH,
        updated_at_utc: None,
        is_deleted: false,
    }
}
