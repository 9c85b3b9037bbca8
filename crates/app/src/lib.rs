//! Product catalog domain and persistence.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod test;

mod timestamps;
