//! Auth service errors.

use thiserror::Error;

use crate::auth::TokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token rejected")]
    InvalidToken(#[source] TokenError),

    #[error("token could not be issued")]
    Issue(#[source] TokenError),
}
