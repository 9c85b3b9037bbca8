//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{ApiSecret, AuthService, SharedSecretAuthService},
    database::{self, DatabaseSettings},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, auth: Arc<dyn AuthService>) -> Self {
        Self { products, auth }
    }

    /// Build application context from database settings and the API secret.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn connect(
        settings: &DatabaseSettings,
        secret: ApiSecret,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(settings)
            .await
            .map_err(AppInitError::Database)?;

        if settings.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migration)?;
        }

        Ok(Self::new(
            Arc::new(PgProductsService::new(pool)),
            Arc::new(SharedSecretAuthService::new(secret)),
        ))
    }
}
