//! Products errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::products::data::ValidationErrors;

/// Name of the unique index guarding product SKUs.
pub const SKU_UNIQUE_CONSTRAINT: &str = "products_sku_key";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("constraint violated: {constraint}")]
    ConstraintViolation { constraint: String },

    #[error("storage error")]
    Persistence(#[source] Error),
}

impl RepositoryError {
    #[must_use]
    pub fn constraint_violation(constraint: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            constraint: constraint.into(),
        }
    }
}

impl From<Error> for RepositoryError {
    fn from(error: Error) -> Self {
        let violated = error
            .as_database_error()
            .and_then(|database_error| match database_error.kind() {
                ErrorKind::UniqueViolation | ErrorKind::CheckViolation => {
                    Some(database_error.constraint().unwrap_or("unknown").to_string())
                }
                _ => None,
            });

        match violated {
            Some(constraint) => Self::ConstraintViolation { constraint },
            None => Self::Persistence(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid product data: {0}")]
    InvalidData(#[from] ValidationErrors),

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for ProductsServiceError {
    fn from(error: RepositoryError) -> Self {
        Self::Storage(error)
    }
}
