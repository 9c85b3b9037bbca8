//! Authentication

mod errors;
mod secret;
mod service;

pub use errors::*;
pub use secret::*;
pub use service::*;
