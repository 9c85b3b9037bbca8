//! Fallible handler steps that have no client-facing error.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

pub(crate) trait ResultExt<T> {
    /// Log the failure under `context` and answer with a bare 500.
    fn or_500(self, context: &str) -> Result<T, ApiError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!(error = %error, context, "handler step failed");

            ApiError::internal()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn ok_values_pass_through() {
        let value: Result<u8, &str> = Ok(7);

        assert!(matches!(value.or_500("unused"), Ok(7)));
    }

    #[test]
    fn errors_become_internal_server_errors() {
        let value: Result<u8, &str> = Err("boom");

        let rendered = value
            .or_500("computing value")
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();

        assert!(
            rendered.starts_with(&StatusCode::INTERNAL_SERVER_ERROR.to_string()),
            "unexpected error: {rendered}"
        );
    }
}
