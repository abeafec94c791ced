//! HTTP handlers. Both POST endpoints parse the raw body themselves so malformed
//! JSON gets the generic error body instead of the extractor's plain-text rejection.

pub(crate) mod chat;
pub(crate) mod search;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

pub(crate) const GENERIC_ERROR: &str = "Failed to process your request";

/// JSON `{ "error": message }` with the given status.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Parses a JSON body; any failure becomes a 500 with [`GENERIC_ERROR`].
pub(crate) fn parse_body<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(endpoint, error = %e, "request body could not be parsed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR)
    })
}
