//! Upload Image Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{extensions::*, state::State};

/// Multipart field holding the image.
pub(crate) const UPLOAD_FIELD: &str = "product";

/// Upload Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    pub success: bool,

    /// Public URL the stored image is served from
    pub image_url: String,
}

/// Upload Image Handler
///
/// Stores the `product` multipart file and returns where it can be fetched.
#[endpoint(
    tags("uploads"),
    summary = "Upload Product Image",
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Missing file or write failure"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(file) = req.file(UPLOAD_FIELD).await else {
        error!("upload request had no `{UPLOAD_FIELD}` file");

        return Err(StatusError::internal_server_error().brief("No file uploaded"));
    };

    let stored = state
        .app
        .uploads
        .store(file.name().map(str::to_owned), file.path().clone())
        .await
        .or_500("failed to store upload")?;

    info!(filename = %stored.filename, "image uploaded");

    Ok(Json(UploadResponse {
        success: true,
        image_url: stored.url,
    }))
}
