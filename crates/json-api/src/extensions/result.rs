//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map any error to an HTTP error, logging the underlying cause.
pub(crate) trait ResultExt<T> {
    fn or_400(self, brief: &str) -> Result<T, StatusError>;

    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }

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
    fn or_400_keeps_the_brief() {
        let result: Result<(), &str> = Err("nope");

        let error = result.or_400("could not parse amount").err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error.map(|e| e.brief),
            Some("could not parse amount".to_string())
        );
    }

    #[test]
    fn or_500_hides_the_cause() {
        let result: Result<(), &str> = Err("connection reset");

        let error = result.or_500("failed to load").err();

        assert_eq!(
            error.map(|e| e.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
