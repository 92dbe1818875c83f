//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::barcode::BarcodeError;

/// Errors raised by the products service and store.
///
/// Display strings are stable per variant; HTTP clients match on them.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("incomplete arguments")]
    IncompleteArguments,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid barcode")]
    InvalidBarcode,

    #[error("invalid country code")]
    InvalidCountryCode,

    #[error("invalid manufacturer code")]
    InvalidManufacturerCode,

    #[error("invalid check digit")]
    InvalidCheckDigit,

    #[error("product not found")]
    NotFound,

    #[error("product already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ProductsServiceError {
    /// Whether the error was caused by the submitted candidate rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::IncompleteArguments
                | Self::InvalidPrice
                | Self::InvalidBarcode
                | Self::InvalidCountryCode
                | Self::InvalidManufacturerCode
                | Self::InvalidCheckDigit
        )
    }
}

impl From<BarcodeError> for ProductsServiceError {
    fn from(error: BarcodeError) -> Self {
        match error {
            BarcodeError::Length | BarcodeError::NotNumeric => Self::InvalidBarcode,
            BarcodeError::CountryCode => Self::InvalidCountryCode,
            BarcodeError::ManufacturerCode => Self::InvalidManufacturerCode,
            BarcodeError::CheckDigit => Self::InvalidCheckDigit,
        }
    }
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}
