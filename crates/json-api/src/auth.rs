//! Session token guard for the user and cart routes.

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{extensions::*, state::State};

/// Header carrying the session token.
pub(crate) const AUTH_TOKEN_HEADER: &str = "auth-token";

const MISSING_TOKEN: &str = "Please authenticate using a valid login";

const INVALID_TOKEN: &str = "Please authenticate using a valid token";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthErrorResponse {
    pub error: String,
}

/// Resolve the `auth-token` header to a user before the guarded handlers run.
#[salvo::handler]
pub(crate) async fn require_token(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_token(req) else {
        reject(res, ctrl, MISSING_TOKEN);

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            error!("app state missing from depot");

            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    let user_uuid = match state.app.auth.authenticate(token).await {
        Ok(user_uuid) => user_uuid,
        Err(source) => {
            debug!("rejected session token: {source}");

            reject(res, ctrl, INVALID_TOKEN);

            return;
        }
    };

    depot.insert_user_uuid(user_uuid);

    ctrl.call_next(req, depot, res).await;
}

fn reject(res: &mut Response, ctrl: &mut FlowCtrl, message: &str) {
    res.status_code(StatusCode::UNAUTHORIZED);
    res.render(Json(AuthErrorResponse {
        error: message.to_string(),
    }));

    ctrl.skip_rest();
}

/// `None` only when the header is absent or empty. Any other value, blank or
/// not valid text, goes on to verification and fails there.
fn extract_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTH_TOKEN_HEADER)?;

    (!value.is_empty()).then(|| value.to_str().unwrap_or_default())
}
