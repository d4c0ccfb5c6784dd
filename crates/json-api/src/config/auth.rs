//! Session token settings.

use std::fmt;

use clap::Args;

#[derive(Args)]
pub struct AuthConfig {
    /// HMAC key for signing `auth-token` values. Changing it logs everyone out.
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"**redacted**")
            .finish()
    }
}
