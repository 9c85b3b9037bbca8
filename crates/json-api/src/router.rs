//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    catch_panic::CatchPanic,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{auth, healthcheck, observability, products, state::State};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Product routes behind the access gate.
fn products_router() -> Router {
    Router::new().hoop(auth::middleware::handler).push(
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(
                Router::with_path("{id}")
                    .get(products::get::handler)
                    .put(products::update::handler)
                    .delete(products::delete::handler),
            ),
    )
}

/// Every route the server answers, with shared hoops and API docs.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(products_router());

    let doc = OpenApi::new("Catalog API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Auth-Token"))),
        )
        .merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}

fn cors() -> impl Handler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler()
}

/// The HTTP service: [`app_router`] wrapped in a permissive CORS layer.
pub(crate) fn service(state: Arc<State>) -> Service {
    Service::new(app_router(state)).hoop(cors())
}
