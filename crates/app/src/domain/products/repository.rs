//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{
    FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
};

use crate::domain::products::{
    changes::{PendingChange, ProductChanges},
    errors::RepositoryError,
    query::ProductQuery,
    records::{NewProductRecord, ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const SOFT_DELETE_PRODUCT_SQL: &str = include_str!("sql/soft_delete_product.sql");

/// Persistence gateway for products.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Products matching `query`, ordered by id.
    async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<ProductRecord>, RepositoryError>;

    /// A single product by id, deleted or not.
    async fn get_product(&self, product: ProductId)
    -> Result<Option<ProductRecord>, RepositoryError>;

    /// Apply every staged change in one transaction.
    ///
    /// Returns the ids assigned to inserted products, in staging order. Nothing
    /// is persisted when any change fails.
    async fn save_changes(&self, changes: ProductChanges)
    -> Result<Vec<ProductId>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_product(
        tx: &mut Transaction<'_, Postgres>,
        product: NewProductRecord,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i64 = query_scalar(INSERT_PRODUCT_SQL)
            .bind(product.sku)
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(SqlxTimestamp::from(product.created_at_utc))
            .fetch_one(&mut **tx)
            .await?;

        Ok(ProductId::new(id))
    }

    async fn update_product(
        tx: &mut Transaction<'_, Postgres>,
        product: ProductRecord,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.id.into_inner())
            .bind(product.sku)
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.updated_at_utc.map(SqlxTimestamp::from))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn soft_delete_product(
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SOFT_DELETE_PRODUCT_SQL)
            .bind(product.into_inner())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<ProductRecord>, RepositoryError> {
        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(query.include_deleted)
            .bind(query.search_term())
            .bind(query.offset())
            .bind(query.limit())
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let product = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_inner())
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn save_changes(
        &self,
        changes: ProductChanges,
    ) -> Result<Vec<ProductId>, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::new();

        for change in changes {
            match change {
                PendingChange::Insert(product) => {
                    inserted.push(Self::insert_product(&mut tx, product).await?);
                }
                PendingChange::Update(product) => {
                    Self::update_product(&mut tx, product).await?;
                }
                PendingChange::SoftDelete(product) => {
                    Self::soft_delete_product(&mut tx, product).await?;
                }
            }
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::new(row.try_get("id")?),
            sku: row.try_get("sku")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            created_at_utc: row
                .try_get::<SqlxTimestamp, _>("created_at_utc")?
                .to_jiff(),
            updated_at_utc: row
                .try_get::<Option<SqlxTimestamp>, _>("updated_at_utc")?
                .map(SqlxTimestamp::to_jiff),
            is_deleted: row.try_get("is_deleted")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::products::errors::SKU_UNIQUE_CONSTRAINT, test::TestDb, timestamps::now_utc,
    };

    use super::*;

    fn new_record(sku: &str, name: &str, price: i64) -> NewProductRecord {
        NewProductRecord {
            sku: sku.to_string(),
            name: name.to_string(),
            description: None,
            price: Decimal::new(price, 2),
            created_at_utc: now_utc(),
        }
    }

    async fn repository() -> (TestDb, PgProductsRepository) {
        let db = TestDb::new().await;
        let repository = PgProductsRepository::new(db.pool().clone());

        (db, repository)
    }

    async fn insert(repository: &PgProductsRepository, product: NewProductRecord) -> ProductId {
        let mut changes = ProductChanges::new();
        changes.add(product);

        let ids = repository.save_changes(changes).await;

        match ids.as_deref() {
            Ok([id]) => *id,
            other => panic!("expected one inserted id, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn inserted_product_round_trips() -> TestResult {
        let (_db, repository) = repository().await;
        let product = new_record("SKU-1", "Widget", 1999);
        let created_at = product.created_at_utc;

        let id = insert(&repository, product).await;
        let stored = repository.get_product(id).await?.ok_or("missing product")?;

        assert_eq!(stored.id, id);
        assert_eq!(stored.sku, "SKU-1");
        assert_eq!(stored.price, Decimal::new(1999, 2));
        assert_eq!(stored.created_at_utc, created_at);
        assert_eq!(stored.updated_at_utc, None);
        assert!(!stored.is_deleted);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn ids_are_assigned_in_staging_order() -> TestResult {
        let (_db, repository) = repository().await;

        let mut changes = ProductChanges::new();
        changes
            .add(new_record("A", "Alpha", 100))
            .add(new_record("B", "Beta", 100));

        let ids = repository.save_changes(changes).await?;

        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1], "expected ascending ids, got {ids:?}");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn duplicate_sku_rolls_back_the_whole_batch() -> TestResult {
        let (_db, repository) = repository().await;

        let mut changes = ProductChanges::new();
        changes
            .add(new_record("DUP", "First", 100))
            .add(new_record("DUP", "Second", 100));

        let result = repository.save_changes(changes).await;

        assert!(
            matches!(
                &result,
                Err(RepositoryError::ConstraintViolation { constraint })
                    if constraint == SKU_UNIQUE_CONSTRAINT
            ),
            "expected sku violation, got {result:?}"
        );

        let products = repository.list_products(&ProductQuery::default()).await?;

        assert!(products.is_empty(), "expected rollback, got {products:?}");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn non_positive_price_is_a_constraint_violation() {
        let (_db, repository) = repository().await;

        let mut changes = ProductChanges::new();
        changes.add(new_record("FREE", "Free", 0));

        let result = repository.save_changes(changes).await;

        assert!(
            matches!(result, Err(RepositoryError::ConstraintViolation { .. })),
            "expected constraint violation, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn soft_deleted_rows_are_filtered_unless_requested() -> TestResult {
        let (_db, repository) = repository().await;

        let kept = insert(&repository, new_record("KEEP", "Kept", 100)).await;
        let gone = insert(&repository, new_record("GONE", "Gone", 100)).await;

        let mut changes = ProductChanges::new();
        changes.soft_delete(gone);
        repository.save_changes(changes).await?;

        let visible = repository.list_products(&ProductQuery::default()).await?;
        let visible: Vec<ProductId> = visible.iter().map(|product| product.id).collect();

        assert_eq!(visible, vec![kept]);

        let all = repository
            .list_products(&ProductQuery {
                include_deleted: true,
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(all.len(), 2);

        let deleted = repository.get_product(gone).await?.ok_or("missing product")?;

        assert!(deleted.is_deleted);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn stale_update_does_not_restore_soft_deleted_row() -> TestResult {
        let (_db, repository) = repository().await;

        let id = insert(&repository, new_record("SKU-1", "Widget", 100)).await;
        let loaded = repository.get_product(id).await?.ok_or("missing product")?;

        let mut delete = ProductChanges::new();
        delete.soft_delete(id);
        repository.save_changes(delete).await?;

        let mut update = ProductChanges::new();
        update.update(ProductRecord {
            name: "Renamed".to_string(),
            updated_at_utc: Some(now_utc()),
            ..loaded
        });
        repository.save_changes(update).await?;

        let stored = repository.get_product(id).await?.ok_or("missing product")?;

        assert!(stored.is_deleted, "update reverted the soft delete");
        assert_eq!(stored.name, "Renamed");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn search_matches_name_or_sku_case_insensitively() -> TestResult {
        let (_db, repository) = repository().await;

        let widget = insert(&repository, new_record("W-1", "Blue Widget", 100)).await;
        let gadget = insert(&repository, new_record("GADGET-7", "Gizmo", 100)).await;
        insert(&repository, new_record("X-9", "Other", 100)).await;

        let by_name = repository
            .list_products(&ProductQuery {
                search: Some("widget".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(by_name.iter().map(|p| p.id).collect::<Vec<_>>(), vec![widget]);

        let by_sku = repository
            .list_products(&ProductQuery {
                search: Some("gadget".to_string()),
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(by_sku.iter().map(|p| p.id).collect::<Vec<_>>(), vec![gadget]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn pages_follow_id_order() -> TestResult {
        let (_db, repository) = repository().await;

        let mut ids = Vec::new();

        for n in 0..5 {
            ids.push(insert(&repository, new_record(&format!("P-{n}"), "Paged", 100)).await);
        }

        let page = repository
            .list_products(&ProductQuery {
                page: 2,
                page_size: 2,
                ..ProductQuery::default()
            })
            .await?;

        assert_eq!(
            page.iter().map(|p| p.id).collect::<Vec<_>>(),
            ids[2..4].to_vec()
        );

        Ok(())
    }
}
