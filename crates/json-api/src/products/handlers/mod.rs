//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::products::models::Product;

pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod new_collections;
pub(crate) mod popular;
pub(crate) mod remove;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Storage identity of the product
    #[serde(rename = "_id")]
    pub uuid: Uuid,

    /// Sequential business id
    pub id: i64,

    pub name: String,

    /// Public URL of the product image
    pub image: String,

    pub category: String,

    pub new_price: f64,

    pub old_price: f64,

    /// When the product was created, RFC 3339
    pub date: String,

    pub available: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into_uuid(),
            id: product.id,
            name: product.name,
            image: product.image,
            category: product.category,
            new_price: product.new_price,
            old_price: product.old_price,
            date: product.created_at.to_string(),
            available: product.available,
        }
    }
}

pub(crate) fn into_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}
