//! Postgres pool and schema

use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError, postgres::PgPoolOptions};

/// Pool connections kept for handlers. Every request takes at most one.
const MAX_CONNECTIONS: u32 = 10;

/// Shared handle to the storefront database.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a transaction. Product id assignment and cart updates each run in one.
    ///
    /// # Errors
    ///
    /// Fails when no connection can be checked out or `BEGIN` is refused.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Open a pool against `database_url`.
///
/// # Errors
///
/// Fails when the URL is malformed or the server cannot be reached.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Bring the `products` and `users` tables up to date.
///
/// # Errors
///
/// Fails when a migration cannot be applied.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
