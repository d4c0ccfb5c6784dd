//! Server configuration.
//!
//! Every flag falls back to an environment variable, and a `.env` file in the
//! working directory is read before either.

use clap::Parser;

pub(crate) mod auth;
pub(crate) mod http;
pub(crate) mod storage;
pub(crate) mod telemetry;

use self::{auth::AuthConfig, http::HttpConfig, storage::StorageConfig, telemetry::TelemetryConfig};

/// Settings for the `bazaar-json` binary.
#[derive(Debug, Parser)]
#[command(name = "bazaar-json", about = "Storefront JSON API", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub http: HttpConfig,

    #[command(flatten)]
    pub storage: StorageConfig,

    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

impl ServerConfig {
    /// Read `.env`, then parse flags and environment.
    ///
    /// # Errors
    ///
    /// Returns the clap error for a missing required value or a malformed one.
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is normal outside development.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
