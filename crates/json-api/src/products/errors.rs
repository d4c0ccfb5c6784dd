//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::Validation(source) => {
            error!("rejected product payload: {source}");

            StatusError::internal_server_error().brief(source.to_string())
        }
        ProductsServiceError::MissingRequiredData => {
            error!("product is missing required data");

            StatusError::internal_server_error().brief("Product is missing required data")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use bazaar_app::domain::validation::ValidationError;

    use super::*;

    #[test]
    fn validation_errors_are_server_errors_with_brief() {
        let error = into_status_error(ProductsServiceError::Validation(
            ValidationError::Required("name"),
        ));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.brief, "`name` is required");
    }

    #[test]
    fn conflicts_are_409() {
        let error = into_status_error(ProductsServiceError::AlreadyExists);

        assert_eq!(error.code, StatusCode::CONFLICT);
    }
}
