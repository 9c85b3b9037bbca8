//! In-memory products repository.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::products::{
    changes::{PendingChange, ProductChanges},
    errors::{RepositoryError, SKU_UNIQUE_CONSTRAINT},
    query::ProductQuery,
    records::{ProductId, ProductRecord},
    repository::ProductsRepository,
};

const PRICE_CHECK_CONSTRAINT: &str = "products_price_positive";

#[derive(Debug, Default)]
struct Store {
    rows: Vec<ProductRecord>,
    next_id: i64,
}

impl Store {
    fn apply(&mut self, change: PendingChange) -> Result<Option<ProductId>, RepositoryError> {
        match change {
            PendingChange::Insert(product) => {
                self.next_id += 1;

                let record = product.into_record(ProductId::new(self.next_id));

                self.check(&record)?;
                self.rows.push(record.clone());

                Ok(Some(record.id))
            }
            PendingChange::Update(product) => {
                self.check(&product)?;

                if let Some(row) = self.rows.iter_mut().find(|row| row.id == product.id) {
                    *row = ProductRecord {
                        is_deleted: row.is_deleted,
                        ..product
                    };
                }

                Ok(None)
            }
            PendingChange::SoftDelete(id) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
                    row.is_deleted = true;
                }

                Ok(None)
            }
        }
    }

    fn check(&self, record: &ProductRecord) -> Result<(), RepositoryError> {
        if record.price <= rust_decimal::Decimal::ZERO {
            return Err(RepositoryError::constraint_violation(PRICE_CHECK_CONSTRAINT));
        }

        if self
            .rows
            .iter()
            .any(|row| row.id != record.id && row.sku == record.sku)
        {
            return Err(RepositoryError::constraint_violation(SKU_UNIQUE_CONSTRAINT));
        }

        Ok(())
    }
}

/// Products repository backed by a `Vec`, enforcing the same constraints as
/// the Postgres schema.
///
/// A failing batch leaves the store untouched, although ids handed out to its
/// inserts are not reused.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    store: Mutex<Store>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn matches_search(row: &ProductRecord, search: &str) -> bool {
    let search = search.to_lowercase();

    row.name.to_lowercase().contains(&search) || row.sku.to_lowercase().contains(&search)
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<ProductRecord>, RepositoryError> {
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(usize::MAX);

        let store = self.store();

        let products = store
            .rows
            .iter()
            .filter(|row| query.include_deleted || !row.is_deleted)
            .filter(|row| query.search_term().is_none_or(|search| matches_search(row, search)))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        Ok(self.store().rows.iter().find(|row| row.id == product).cloned())
    }

    async fn save_changes(
        &self,
        changes: ProductChanges,
    ) -> Result<Vec<ProductId>, RepositoryError> {
        let mut store = self.store();
        let mut staged = Store {
            rows: store.rows.clone(),
            next_id: store.next_id,
        };

        let mut inserted = Vec::new();

        for change in changes {
            if let Some(id) = staged.apply(change)? {
                inserted.push(id);
            }
        }

        *store = staged;

        Ok(inserted)
    }
}
