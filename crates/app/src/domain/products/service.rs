//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, debug, info};

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{Product, ProductDraft, ProductUuid},
        repository::PgProductsRepository,
    },
};

/// Most products returned by the new-collection view.
pub const NEW_COLLECTION_SIZE: usize = 8;

/// Most products returned by the popular view.
pub const POPULAR_PRODUCTS_SIZE: usize = 4;

/// Category featured by the popular view.
pub const POPULAR_CATEGORY: &str = "men";

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn new_collections(&self) -> Result<Vec<Product>, ProductsServiceError> {
        self.list_products().await.map(new_collection)
    }

    async fn popular_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_in_category(&mut tx, POPULAR_CATEGORY)
            .await?;

        tx.commit().await?;

        Ok(popular(products))
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, draft),
        fields(product_id = tracing::field::Empty),
        err
    )]
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductsServiceError> {
        let product = draft.validate()?;

        let mut tx = self.db.begin().await?;

        self.repository.lock_for_id_assignment(&mut tx).await?;

        let id = next_product_id(self.repository.max_product_id(&mut tx).await?);

        Span::current().record("product_id", id);

        let created = self
            .repository
            .create_product(&mut tx, ProductUuid::new(), id, product)
            .await?;

        tx.commit().await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.remove_product",
        skip(self),
        err
    )]
    async fn remove_product(&self, id: i64) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, id).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            debug!(product_id = id, "no product matched removal");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in store order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the latest products, skipping the very first one.
    async fn new_collections(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the first few products in the featured category.
    async fn popular_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Validates the draft and stores it under the next business id.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductsServiceError>;

    /// Deletes the product with the given business id. Unknown ids are a no-op.
    async fn remove_product(&self, id: i64) -> Result<(), ProductsServiceError>;
}

/// One past the current maximum, or 1 for an empty catalog.
pub(crate) fn next_product_id(max: Option<i64>) -> i64 {
    max.map_or(1, |id| id.saturating_add(1))
}

/// Drop the first product, then keep the trailing [`NEW_COLLECTION_SIZE`].
pub(crate) fn new_collection(products: Vec<Product>) -> Vec<Product> {
    let after_first = products.len().saturating_sub(1);
    let skip = 1 + after_first.saturating_sub(NEW_COLLECTION_SIZE);

    products.into_iter().skip(skip).collect()
}

pub(crate) fn popular(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().take(POPULAR_PRODUCTS_SIZE).collect()
}
