//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::models::{NewProduct, Product, ProductUuid};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_PRODUCTS_IN_CATEGORY_SQL: &str = include_str!("sql/list_products_in_category.sql");
const LOCK_PRODUCTS_SQL: &str = include_str!("sql/lock_products.sql");
const MAX_PRODUCT_ID_SQL: &str = include_str!("sql/max_product_id.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_in_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_IN_CATEGORY_SQL)
            .bind(category)
            .fetch_all(&mut **tx)
            .await
    }

    /// Block other id assigners until `tx` ends. Readers are not blocked.
    pub(crate) async fn lock_for_id_assignment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_PRODUCTS_SQL).execute(&mut **tx).await?;

        Ok(())
    }

    pub(crate) async fn max_product_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<i64>, sqlx::Error> {
        query_scalar::<Postgres, Option<i64>>(MAX_PRODUCT_ID_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: ProductUuid,
        id: i64,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(id)
            .bind(product.name)
            .bind(product.image)
            .bind(product.category)
            .bind(product.new_price)
            .bind(product.old_price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            category: row.try_get("category")?,
            new_price: row.try_get("new_price")?,
            old_price: row.try_get("old_price")?,
            available: row.try_get("available")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
