//! Add Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use bazaar_app::domain::{
    products::{ProductsServiceError, models::ProductDraft},
    validation::ValidationError,
};

use crate::{
    extensions::*,
    lenient::{LenientNumber, optional_f64},
    products::errors::into_status_error,
    state::State,
};

/// Add Product Request
///
/// The business id, date and availability are assigned by the server; any
/// such fields in the body are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddProductRequest {
    pub name: Option<String>,

    /// Public image URL, usually one returned by `/upload`
    pub image: Option<String>,

    pub category: Option<String>,

    /// Number or numeric string
    pub new_price: Option<LenientNumber>,

    /// Number or numeric string
    pub old_price: Option<LenientNumber>,
}

impl TryFrom<AddProductRequest> for ProductDraft {
    type Error = ValidationError;

    fn try_from(request: AddProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductDraft {
            new_price: optional_f64("new_price", request.new_price.as_ref())?,
            old_price: optional_f64("old_price", request.old_price.as_ref())?,
            name: request.name,
            image: request.image,
            category: request.category,
        })
    }
}

/// Product Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductAddedResponse {
    pub success: bool,

    /// Name of the stored product
    pub name: String,
}

/// Add Product Handler
#[endpoint(
    tags("products"),
    summary = "Add Product",
    responses(
        (status_code = StatusCode::OK, description = "Product stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Body is not valid JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Missing or non-numeric field, or storage failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductAddedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let draft = ProductDraft::try_from(json.into_inner())
        .map_err(|source| into_status_error(ProductsServiceError::Validation(source)))?;

    let product = state
        .app
        .products
        .create_product(draft)
        .await
        .map_err(into_status_error)?;

    info!(product_id = product.id, "product saved");

    Ok(Json(ProductAddedResponse {
        success: true,
        name: product.name,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::{
        products::{MockProductsService, ProductsServiceError},
        validation::ValidationError,
    };

    use crate::test_helpers::{TestState, make_product};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        TestState::default()
            .with_products(products)
            .service(Router::with_path("addproduct").post(handler))
    }

    fn strict(products: &mut MockProductsService) {
        products.expect_list_products().never();
        products.expect_new_collections().never();
        products.expect_popular_products().never();
        products.expect_remove_product().never();
    }

    #[tokio::test]
    async fn test_add_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|draft| {
                draft.name.as_deref() == Some("Product 1")
                    && draft.category.as_deref() == Some("men")
                    && draft.new_price == Some(50.0)
                    && draft.old_price == Some(80.5)
            })
            .return_once(|draft| {
                let mut product = make_product(1, "men");
                product.name = draft.name.unwrap_or_default();

                Ok(product)
            });

        strict(&mut products);

        let mut res = TestClient::post("http://example.com/addproduct")
            .json(&json!({
                "name": "Product 1",
                "image": "http://localhost:4000/images/product_1.png",
                "category": "men",
                "new_price": 50.0,
                "old_price": 80.5,
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductAddedResponse = res.take_json().await?;

        assert!(body.success);
        assert_eq!(body.name, "Product 1");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_missing_field_returns_500() {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|draft| draft.name.is_none())
            .return_once(|_| {
                Err(ProductsServiceError::Validation(ValidationError::Required(
                    "name",
                )))
            });

        strict(&mut products);

        let res = TestClient::post("http://example.com/addproduct")
            .json(&json!({ "category": "men", "new_price": 1.0, "old_price": 2.0 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_add_product_accepts_numeric_string_prices() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|draft| draft.new_price == Some(50.0) && draft.old_price == Some(80.0))
            .return_once(|_| Ok(make_product(1, "men")));

        strict(&mut products);

        let mut res = TestClient::post("http://example.com/addproduct")
            .json(&json!({
                "name": "Product 1",
                "image": "http://localhost:4000/images/product_1.png",
                "category": "men",
                "new_price": "50",
                "old_price": "80",
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductAddedResponse = res.take_json().await?;

        assert!(body.success);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_non_numeric_price_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        strict(&mut products);

        let mut res = TestClient::post("http://example.com/addproduct")
            .json(&json!({ "name": "Shirt", "new_price": "cheap", "old_price": 2.0 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body = res.take_string().await?;

        assert!(body.contains("new_price"), "unexpected body: {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_non_json_body_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        strict(&mut products);

        let res = TestClient::post("http://example.com/addproduct")
            .raw_json("not json")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
