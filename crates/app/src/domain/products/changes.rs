//! Staged product writes.

use crate::domain::products::records::{NewProductRecord, ProductId, ProductRecord};

/// A single staged write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingChange {
    /// Insert a new row.
    Insert(NewProductRecord),

    /// Overwrite the editable columns of the row with this id. The deleted
    /// flag is left as stored.
    Update(ProductRecord),

    /// Flag the row as deleted. Unknown ids are ignored.
    SoftDelete(ProductId),
}

/// Unit of work: writes staged here are applied together by
/// [`ProductsRepository::save_changes`](crate::domain::products::ProductsRepository::save_changes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pending: Vec<PendingChange>,
}

impl ProductChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: NewProductRecord) -> &mut Self {
        self.pending.push(PendingChange::Insert(product));
        self
    }

    pub fn update(&mut self, product: ProductRecord) -> &mut Self {
        self.pending.push(PendingChange::Update(product));
        self
    }

    pub fn soft_delete(&mut self, product: ProductId) -> &mut Self {
        self.pending.push(PendingChange::SoftDelete(product));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingChange> {
        self.pending.iter()
    }
}

impl IntoIterator for ProductChanges {
    type Item = PendingChange;
    type IntoIter = std::vec::IntoIter<PendingChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.pending.into_iter()
    }
}
