//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    carts::{errors::into_status_error, handlers::CartItemRequest},
    extensions::*,
    state::State,
};

/// Remove From Cart Handler
///
/// Takes one of the item out of the authenticated user's cart. Quantities
/// never go below zero.
#[endpoint(
    tags("carts"),
    summary = "Remove From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartItemRequest>,
    depot: &mut Depot,
) -> Result<String, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user_uuid = depot.user_uuid_or_401()?;
    let item_id = json.into_inner().slot()?;

    info!(%user_uuid, item_id, "removing item from cart");

    state
        .app
        .carts
        .remove_item(user_uuid, item_id)
        .await
        .map_err(into_status_error)?;

    Ok("Removed".to_string())
}
