//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

/// Validation failures carry their message in the brief so callers can tell
/// which rule rejected the update.
pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    if error.is_validation() {
        return StatusError::bad_request().brief(error.to_string());
    }

    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
        other => {
            error!("unmapped product error: {other}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn validation_errors_are_bad_requests_with_their_message() {
        let cases = [
            (ProductsServiceError::IncompleteArguments, "incomplete arguments"),
            (ProductsServiceError::InvalidPrice, "invalid price"),
            (ProductsServiceError::InvalidBarcode, "invalid barcode"),
            (ProductsServiceError::InvalidCountryCode, "invalid country code"),
            (ProductsServiceError::InvalidManufacturerCode, "invalid manufacturer code"),
            (ProductsServiceError::InvalidCheckDigit, "invalid check digit"),
        ];

        for (error, message) in cases {
            let status = into_status_error(error);

            assert_eq!(status.code, StatusCode::BAD_REQUEST, "{message}");
            assert_eq!(status.brief, message, "brief should carry the rule message");
        }
    }

    #[test]
    fn already_exists_is_409() {
        let status = into_status_error(ProductsServiceError::AlreadyExists);

        assert_eq!(status.code, StatusCode::CONFLICT, "duplicates are conflicts");
    }

    #[test]
    fn not_found_is_404() {
        let status = into_status_error(ProductsServiceError::NotFound);

        assert_eq!(status.code, StatusCode::NOT_FOUND, "unknown products are 404");
    }

    #[test]
    fn storage_errors_are_500() {
        let status = into_status_error(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(
            status.code,
            StatusCode::INTERNAL_SERVER_ERROR,
            "storage failures are 500"
        );
    }
}
