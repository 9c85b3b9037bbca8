//! Auth Config

use std::fmt;

use clap::Args;

/// Access gate settings.
#[derive(Args)]
pub struct AuthConfig {
    /// Shared secret expected in the `X-Auth-Token` header
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("auth_token", &"**redacted**")
            .finish()
    }
}
