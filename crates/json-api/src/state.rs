//! Shared handler state

use std::sync::Arc;

use catalog_app::{auth::AuthService, context::AppContext, domain::products::ProductsService};

/// Services reachable from handlers through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) auth: Arc<dyn AuthService>,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::from(app))
    }
}

impl From<AppContext> for State {
    fn from(app: AppContext) -> Self {
        Self {
            products: app.products,
            auth: app.auth,
        }
    }
}
