//! Liveness Handler

use salvo::prelude::*;

/// Plain-text liveness message served at the root path.
pub(crate) const LIVENESS_MESSAGE: &str = "Backend API is running";

/// Liveness handler
///
/// Confirms the process is up without touching the store.
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler() -> String {
    LIVENESS_MESSAGE.to_owned()
}
