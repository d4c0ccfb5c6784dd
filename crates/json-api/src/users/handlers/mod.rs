//! User Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

pub(crate) mod get;
pub(crate) mod login;
pub(crate) mod signup;

/// Outcome of signup or login.
///
/// Signup reports failures under `error`, login under `errors`; only one of
/// `token`, `error` and `errors` is ever present.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    pub success: bool,

    /// Session token to send back in the `auth-token` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl SessionResponse {
    pub(crate) fn issued(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            ..Self::default()
        }
    }
}
