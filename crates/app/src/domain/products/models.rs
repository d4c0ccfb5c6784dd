//! Product Models

use jiff::Timestamp;

use crate::{
    domain::validation::{ValidationError, required, required_text},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Storage identity.
    pub uuid: ProductUuid,

    /// Sequential business id shown to shoppers.
    pub id: i64,
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
    pub available: bool,
    pub created_at: Timestamp,
}

/// Product fields as submitted by a client, before required-field checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub new_price: Option<f64>,
    pub old_price: Option<f64>,
}

impl ProductDraft {
    /// Check every required field is present.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(self) -> Result<NewProduct, ValidationError> {
        Ok(NewProduct {
            name: required_text("name", self.name)?,
            image: required_text("image", self.image)?,
            category: required_text("category", self.category)?,
            new_price: required("new_price", self.new_price)?,
            old_price: required("old_price", self.old_price)?,
        })
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
}
