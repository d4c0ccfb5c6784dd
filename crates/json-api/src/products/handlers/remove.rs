//! Remove Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Remove Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveProductRequest {
    /// Business id of the product to delete
    pub id: i64,

    /// Echoed back in the response; never checked against the stored product
    pub name: Option<String>,
}

/// Product Removed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRemovedResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Remove Product Handler
///
/// Unknown ids succeed without deleting anything.
#[endpoint(tags("products"), summary = "Remove Product")]
pub(crate) async fn handler(
    json: JsonBody<RemoveProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductRemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    state
        .app
        .products
        .remove_product(request.id)
        .await
        .map_err(into_status_error)?;

    info!(product_id = request.id, "product removed");

    Ok(Json(ProductRemovedResponse {
        success: true,
        name: request.name,
    }))
}
