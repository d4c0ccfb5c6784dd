//! Popular Products Handler

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

/// Popular Products Handler
///
/// Returns up to four products from the featured category.
#[endpoint(tags("products"), summary = "Popular Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .popular_products()
        .await
        .map_err(into_status_error)?;

    info!(count = products.len(), "popular products fetched");

    Ok(Json(into_responses(products)))
}
