//! Handler helper extensions.

use std::{
    any::{Any, type_name},
    fmt::Display,
};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Fetch injected state from the depot, or fail the request with a 500.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(state = type_name::<T>(), "state not injected into depot");

            StatusError::internal_server_error()
        })
    }
}

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_depot_state_is_500() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert!(
            matches!(result, Err(ref error) if error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500, got {result:?}"
        );
    }

    #[test]
    fn or_500_keeps_ok_values() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_500("unused").ok(), Some(7));
    }
}
