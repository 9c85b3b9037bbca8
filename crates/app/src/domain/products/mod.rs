//! Products

pub mod changes;
pub mod data;
pub mod errors;
pub mod models;
pub mod query;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::{ProductsServiceError, RepositoryError};
pub use repository::{PgProductsRepository, ProductsRepository};
pub use service::*;
