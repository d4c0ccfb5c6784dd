//! Catalogue, account and image storage settings.

use std::path::PathBuf;

use clap::Args;

/// Postgres holds products and users; images live on local disk.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Postgres connection string, e.g. `postgres://bazaar@localhost/bazaar`
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Directory `/upload` writes into and `/images` serves from. Created at startup.
    #[arg(long, env = "UPLOAD_DIR", default_value = "upload/images")]
    pub upload_dir: PathBuf,

    /// Origin prefixed to `/images/<file>` in returned image URLs
    #[arg(long, env = "BASE_URL", default_value = "http://localhost:4000")]
    pub base_url: String,
}
