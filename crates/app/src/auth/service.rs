//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{ApiSecret, AuthServiceError};

/// Checks presented tokens against the single configured secret.
#[derive(Debug, Clone)]
pub struct SharedSecretAuthService {
    secret: ApiSecret,
}

impl SharedSecretAuthService {
    #[must_use]
    pub fn new(secret: ApiSecret) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl AuthService for SharedSecretAuthService {
    async fn authenticate(&self, token: &str) -> Result<(), AuthServiceError> {
        if self.secret.matches(token) {
            Ok(())
        } else {
            Err(AuthServiceError::InvalidToken)
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Accept or reject a presented token.
    async fn authenticate(&self, token: &str) -> Result<(), AuthServiceError>;
}
