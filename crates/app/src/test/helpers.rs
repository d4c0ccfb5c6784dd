//! Test Helpers

use jiff::Timestamp;

use crate::domain::{
    products::models::{Product, ProductDraft, ProductUuid},
    users::models::SignupDraft,
};

/// Password every [`signup_draft`] user signs up with.
pub(crate) const TEST_PASSWORD: &str = "password";

pub(crate) fn make_product(id: i64, category: &str) -> Product {
    Product {
        uuid: ProductUuid::new(),
        id,
        name: format!("Product {id}"),
        image: format!("http://localhost:4000/images/product_{id}.png"),
        category: category.to_string(),
        new_price: 50.0,
        old_price: 80.5,
        available: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn product_draft(category: &str) -> ProductDraft {
    ProductDraft {
        name: Some("Striped Flutter Sleeve Blouse".to_string()),
        image: Some("http://localhost:4000/images/product_1.png".to_string()),
        category: Some(category.to_string()),
        new_price: Some(50.0),
        old_price: Some(80.5),
    }
}

pub(crate) fn signup_draft(email: &str) -> SignupDraft {
    SignupDraft {
        name: Some("Ada".to_string()),
        email: Some(email.to_string()),
        password: Some(TEST_PASSWORD.to_string()),
    }
}
