//! Get User Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use bazaar_app::domain::users::UsersServiceError;

use crate::{
    extensions::*,
    state::State,
    users::errors::{SERVER_ERROR, USER_NOT_FOUND},
};

/// Current User Response
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Get User Handler
///
/// Returns the display name of the authenticated user.
#[endpoint(
    tags("users"),
    summary = "Get Current User",
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::NOT_FOUND, description = "User no longer exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user_uuid = depot.user_uuid_or_401()?;

    let (status, message) = match state.app.users.get_user(user_uuid).await {
        Ok(user) => {
            return Ok(Json(UserResponse {
                success: true,
                name: Some(user.name),
                error: None,
            }));
        }
        Err(UsersServiceError::NotFound) => (StatusCode::NOT_FOUND, USER_NOT_FOUND),
        Err(source) => {
            error!(%user_uuid, "failed to fetch user: {source}");

            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR)
        }
    };

    res.status_code(status);

    Ok(Json(UserResponse {
        error: Some(message.to_string()),
        ..UserResponse::default()
    }))
}
