//! Signup Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use bazaar_app::domain::users::{UsersServiceError, models::SignupDraft};

use crate::{
    extensions::*,
    state::State,
    users::{
        errors::{EXISTING_USER, into_status_error},
        handlers::SessionResponse,
    },
};

/// Signup Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SignupRequest {
    /// Display name
    pub username: Option<String>,

    pub email: Option<String>,

    pub password: Option<String>,
}

impl From<SignupRequest> for SignupDraft {
    fn from(request: SignupRequest) -> Self {
        SignupDraft {
            name: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

/// Signup Handler
///
/// Registers a user with an empty cart and returns a session token.
#[endpoint(
    tags("users"),
    summary = "Sign Up",
    responses(
        (status_code = StatusCode::OK, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Email already registered"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Missing field or storage failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SignupRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = match state.app.users.signup(json.into_inner().into()).await {
        Ok(user) => user,
        Err(UsersServiceError::AlreadyExists) => {
            res.status_code(StatusCode::BAD_REQUEST);

            return Ok(Json(SessionResponse {
                error: Some(EXISTING_USER.to_string()),
                ..SessionResponse::default()
            }));
        }
        Err(error) => return Err(into_status_error(error)),
    };

    let token = state
        .app
        .auth
        .issue_token(user.uuid)
        .await
        .or_500("failed to issue session token")?;

    info!(user_uuid = %user.uuid, "user signed up");

    Ok(Json(SessionResponse::issued(token)))
}
