//! HTTP error responses.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

use crate::products::responses::MutationResponse;

/// Error body shared by every non-mutation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable summary
    pub message: String,

    /// Field-level validation messages
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
enum ApiErrorBody {
    Message(ErrorResponse),
    Outcome(MutationResponse),
}

/// A failed request: status plus JSON body.
#[derive(Debug, Clone)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody::Message(ErrorResponse::new(message)),
        }
    }

    pub(crate) fn unauthorized() -> Self {
        Self::message(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::message(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal() -> Self {
        Self::message(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub(crate) fn validation<'a, 'b, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'b [String])>,
    {
        let errors = fields
            .into_iter()
            .map(|(field, messages)| (field.to_owned(), messages.to_vec()))
            .collect();

        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody::Message(ErrorResponse {
                message: "One or more validation errors occurred.".to_owned(),
                errors,
            }),
        }
    }

    /// A mutation outcome rendered with a failure status.
    pub(crate) fn rejected(status: StatusCode, outcome: MutationResponse) -> Self {
        Self {
            status,
            body: ApiErrorBody::Outcome(outcome),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let message = match &self.body {
            ApiErrorBody::Message(body) => &body.message,
            ApiErrorBody::Outcome(body) => &body.message,
        };

        write!(f, "{}: {message}", self.status)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);

        match self.body {
            ApiErrorBody::Message(body) => res.render(Json(body)),
            ApiErrorBody::Outcome(body) => res.render(Json(body)),
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn fails() -> Result<&'static str, ApiError> {
        let messages = vec!["Name is required.".to_owned()];

        Err(ApiError::validation([("name", messages.as_slice())]))
    }

    #[tokio::test]
    async fn validation_error_renders_field_messages() -> TestResult {
        let mut res = TestClient::get("http://example.com")
            .send(&Service::new(Router::new().get(fails)))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.errors.get("name").map(Vec::as_slice),
            Some(["Name is required.".to_owned()].as_slice())
        );

        Ok(())
    }

    #[test]
    fn display_includes_status_and_message() {
        assert_eq!(
            ApiError::not_found("Product not found.").to_string(),
            "404 Not Found: Product not found."
        );
    }
}
