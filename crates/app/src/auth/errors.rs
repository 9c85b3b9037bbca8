//! Auth errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token is invalid")]
    InvalidToken,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiSecretError {
    #[error("api secret cannot be empty")]
    Empty,
}
