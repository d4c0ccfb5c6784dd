//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::carts::CartsServiceError;

/// Guarded routes only see users the token resolved, so a missing user is a
/// server-side fault rather than a client one.
pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => {
            error!("authenticated user has no cart");

            StatusError::internal_server_error()
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn every_cart_error_is_a_server_error() {
        for error in [
            CartsServiceError::NotFound,
            CartsServiceError::Sql(sqlx::Error::PoolTimedOut),
        ] {
            assert_eq!(
                into_status_error(error).code,
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
