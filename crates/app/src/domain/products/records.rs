//! Product Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;

/// Product identifier assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(i64);

impl ProductId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.into_inner()
    }
}

/// Product Record
///
/// A row of the `products` table, soft-deleted or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at_utc: Timestamp,
    pub updated_at_utc: Option<Timestamp>,
    pub is_deleted: bool,
}

/// Product row staged for insertion; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductRecord {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at_utc: Timestamp,
}

impl NewProductRecord {
    /// Materialise the stored row once an id has been assigned.
    #[must_use]
    pub fn into_record(self, id: ProductId) -> ProductRecord {
        ProductRecord {
            id,
            sku: self.sku,
            name: self.name,
            description: self.description,
            price: self.price,
            created_at_utc: self.created_at_utc,
            updated_at_utc: None,
            is_deleted: false,
        }
    }
}
