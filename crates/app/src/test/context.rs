//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{carts::PgCartsService, products::PgProductsService, users::PgUsersService},
};

use super::db::TestDb;

/// Real services wired to a fresh, migrated database.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub users: PgUsersService,
    pub carts: PgCartsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            users: PgUsersService::new(db.clone()),
            carts: PgCartsService::new(db),
            db: test_db,
        }
    }
}
