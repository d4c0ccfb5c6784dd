//! Get Cart Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::prelude::*;
use tracing::info;

use bazaar_app::domain::carts::models::CartSlot;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Get Cart Handler
///
/// Returns the authenticated user's cart as a slot to quantity object.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart contents"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<BTreeMap<CartSlot, i64>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user_uuid = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user_uuid)
        .await
        .map_err(into_status_error)?;

    info!(%user_uuid, slots = cart.len(), "cart fetched");

    Ok(Json(cart.iter().collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use bazaar_app::domain::carts::{
        MockCartsService,
        models::{CART_SLOTS, CartData},
    };

    use crate::test_helpers::{TEST_USER_UUID, TestState};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        TestState::default()
            .with_carts(carts)
            .authenticated_service(Router::with_path("getcart").post(handler))
    }

    #[tokio::test]
    async fn test_get_cart_returns_every_slot() -> TestResult {
        let mut cart = CartData::empty();
        cart.increment(4);
        cart.increment(4);

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(cart));

        let mut res = TestClient::post("http://example.com/getcart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(
            body.as_object().map(serde_json::Map::len),
            usize::try_from(CART_SLOTS).ok()
        );
        assert_eq!(body["4"], json!(2));
        assert_eq!(body["0"], json!(0));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_without_auth_returns_401() {
        let service = TestState::default().service(Router::with_path("getcart").post(handler));

        let res = TestClient::post("http://example.com/getcart")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }
}
