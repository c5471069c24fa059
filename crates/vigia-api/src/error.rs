//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use vigia_core::Error;

/// Wrapper turning the core error taxonomy into HTTP responses.
///
/// `NotFound` becomes a 404 with a `detail` body; everything else is a
/// 500. Data-access failures are logged with their full chain before the
/// response is built, so nothing is swallowed into a default value.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
