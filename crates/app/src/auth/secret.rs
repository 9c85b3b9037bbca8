//! Shared API secret.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::auth::ApiSecretError;

/// The value callers must present to reach the API.
///
/// Wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct ApiSecret {
    value: String,
}

impl ApiSecret {
    /// Wrap a configured secret.
    ///
    /// # Errors
    ///
    /// Returns [`ApiSecretError::Empty`] for an empty value.
    pub fn new(value: impl Into<String>) -> Result<Self, ApiSecretError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ApiSecretError::Empty);
        }

        Ok(Self { value })
    }

    /// Compare `presented` against the secret in constant time.
    #[must_use]
    pub fn matches(&self, presented: &str) -> bool {
        bool::from(self.value.as_bytes().ct_eq(presented.as_bytes()))
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for ApiSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
