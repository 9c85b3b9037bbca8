//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    domain::products::{
        changes::ProductChanges,
        data::{NewProduct, ProductUpdate},
        errors::{ProductsServiceError, RepositoryError, SKU_UNIQUE_CONSTRAINT},
        models::{MutationOutcome, Product},
        query::ProductQuery,
        records::ProductId,
        repository::{PgProductsRepository, ProductsRepository},
    },
    timestamps,
};

const CREATED_MESSAGE: &str = "Product created successfully.";
const UPDATED_MESSAGE: &str = "Product updated successfully.";

#[derive(Clone)]
pub struct PgProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::from_repository(Arc::new(PgProductsRepository::new(pool)))
    }

    #[must_use]
    pub fn from_repository(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }

    /// Commit `changes`, turning a SKU collision into a failed outcome.
    async fn commit(
        &self,
        changes: ProductChanges,
        sku: &str,
    ) -> Result<Result<Vec<ProductId>, MutationOutcome>, ProductsServiceError> {
        match self.repository.save_changes(changes).await {
            Ok(ids) => Ok(Ok(ids)),
            Err(RepositoryError::ConstraintViolation { constraint })
                if constraint == SKU_UNIQUE_CONSTRAINT =>
            {
                debug!(%sku, "rejected duplicate sku");

                Ok(Err(duplicate_sku(sku)))
            }
            Err(error) => Err(error.into()),
        }
    }
}

impl Debug for PgProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgProductsService").finish_non_exhaustive()
    }
}

fn duplicate_sku(sku: &str) -> MutationOutcome {
    MutationOutcome::failed(format!("A product with SKU '{sku}' already exists."))
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, ProductsServiceError> {
        let products = self.repository.list_products(&query).await?;

        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn get_product(&self, product: ProductId) -> Result<Option<Product>, ProductsServiceError> {
        let product = self.repository.get_product(product).await?;

        Ok(product.map(Product::from))
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<MutationOutcome, ProductsServiceError> {
        product.validate()?;

        let sku = product.sku.clone();

        let mut changes = ProductChanges::new();
        changes.add(product.into_record(timestamps::now_utc()));

        let ids = match self.commit(changes, &sku).await? {
            Ok(ids) => ids,
            Err(rejected) => return Ok(rejected),
        };

        let Some(&id) = ids.first() else {
            return Err(RepositoryError::Persistence(sqlx::Error::RowNotFound).into());
        };

        info!(product_id = %id, %sku, "created product");

        Ok(MutationOutcome::succeeded(id, CREATED_MESSAGE))
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<MutationOutcome>, ProductsServiceError> {
        update.validate()?;

        let Some(existing) = self.repository.get_product(product).await? else {
            return Ok(None);
        };

        let sku = update.sku.clone();
        let replacement = update.apply_to(&existing, timestamps::now_utc());

        let mut changes = ProductChanges::new();
        changes.update(replacement);

        if let Err(rejected) = self.commit(changes, &sku).await? {
            return Ok(Some(rejected));
        }

        info!(product_id = %product, %sku, "updated product");

        Ok(Some(MutationOutcome::succeeded(product, UPDATED_MESSAGE)))
    }

    async fn soft_delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError> {
        if self.repository.get_product(product).await?.is_none() {
            return Ok(false);
        }

        let mut changes = ProductChanges::new();
        changes.soft_delete(product);

        self.repository.save_changes(changes).await?;

        info!(product_id = %product, "soft deleted product");

        Ok(true)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Products matching the query, in id order.
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, ProductsServiceError>;

    /// A single product, including soft-deleted ones. `None` when the id is unknown.
    async fn get_product(&self, product: ProductId) -> Result<Option<Product>, ProductsServiceError>;

    /// Validate and insert a product.
    ///
    /// A duplicate SKU yields a failed outcome rather than an error.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<MutationOutcome, ProductsServiceError>;

    /// Replace the mutable fields of a product. `None` when the id is unknown.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<MutationOutcome>, ProductsServiceError>;

    /// Flag a product as deleted. `false` when the id is unknown.
    async fn soft_delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError>;
}
