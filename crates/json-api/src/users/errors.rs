//! User Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::users::UsersServiceError;

/// Duplicate-email signup message.
pub(crate) const EXISTING_USER: &str = "Existing user found with same email address";

/// Login failure for a known email with the wrong password.
pub(crate) const WRONG_PASSWORD: &str = "Wrong Password";

/// Login failure for an email with no account.
pub(crate) const WRONG_EMAIL: &str = "Wrong Email address";

pub(crate) const USER_NOT_FOUND: &str = "User not found";

pub(crate) const SERVER_ERROR: &str = "Server error";

/// Errors with no route-specific body.
pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::Validation(source) => {
            error!("rejected user payload: {source}");

            StatusError::internal_server_error().brief(source.to_string())
        }
        UsersServiceError::AlreadyExists
        | UsersServiceError::NotFound
        | UsersServiceError::UnknownEmail
        | UsersServiceError::WrongPassword => {
            error!("unexpected user outcome: {error}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("user storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
