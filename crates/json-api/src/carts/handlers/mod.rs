//! Cart Handlers

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::models::CartSlot;

use crate::lenient::LenientNumber;

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod remove;

/// Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Product id, which doubles as the cart slot. Number or numeric string.
    #[serde(rename = "itemId")]
    pub item_id: LenientNumber,
}

impl CartItemRequest {
    pub(crate) fn slot(&self) -> Result<CartSlot, StatusError> {
        self.item_id
            .to_u32()
            .ok_or_else(|| StatusError::bad_request().brief("`itemId` must be a cart slot number"))
    }
}
