//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        products::{PgProductsService, ProductsService},
        users::{PgUsersService, UsersService},
    },
    uploads::{DiskUploadsService, UploadsService, UploadsServiceError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("failed to prepare upload storage")]
    Uploads(#[source] UploadsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
    pub carts: Arc<dyn CartsService>,
    pub auth: Arc<dyn AuthService>,
    pub uploads: Arc<dyn UploadsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Connects, applies pending migrations and prepares the upload directory.
    ///
    /// # Errors
    ///
    /// Returns an error when any of those steps fails.
    pub async fn from_database_url(
        url: &str,
        auth: JwtAuthService,
        uploads: DiskUploadsService,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        uploads.ensure_dir().await.map_err(AppInitError::Uploads)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db)),
            auth: Arc::new(auth),
            uploads: Arc::new(uploads),
        })
    }
}
