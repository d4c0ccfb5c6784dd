//! New Collections Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        handlers::{ProductResponse, into_responses},
    },
    state::State,
};

/// New Collections Handler
///
/// Returns up to eight of the latest products, never the very first one.
#[endpoint(tags("products"), summary = "New Collections")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .new_collections()
        .await
        .map_err(into_status_error)?;

    info!(count = products.len(), "new collections fetched");

    Ok(Json(into_responses(products)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::products::MockProductsService;

    use crate::test_helpers::{TestState, make_product};

    use super::*;

    #[tokio::test]
    async fn test_new_collections_returns_service_selection() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_new_collections()
            .once()
            .return_once(|| Ok((3..=10).map(|id| make_product(id, "women")).collect()));

        products.expect_list_products().never();
        products.expect_popular_products().never();
        products.expect_create_product().never();
        products.expect_remove_product().never();

        let service = TestState::default()
            .with_products(products)
            .service(Router::with_path("newcollections").get(handler));

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/newcollections")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 8);
        assert_eq!(response.first().map(|product| product.id), Some(3));

        Ok(())
    }
}
