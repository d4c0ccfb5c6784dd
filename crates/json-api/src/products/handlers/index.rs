//! All Products Handler

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

/// All Products Handler
///
/// Returns every product in store order.
#[endpoint(tags("products"), summary = "List All Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    info!(count = products.len(), "all products fetched");

    Ok(Json(into_responses(products)))
}
