//! Chat handler: every message is answered by the keyword router, never by the
//! search index. The reply carries the decorative header, the single curated
//! source label, and `foundResults: 1`.

use super::{error_response, parse_body, GENERIC_ERROR};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use f1_core::{QueryResult, ANSWER_PREFIX};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    pub(crate) message: Option<Value>,
}

/// Why a request carries no usable message text.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MessageError {
    /// Absent, `null`, `""`, `false` or `0`.
    Missing,
    /// Any other non-string value.
    NotText,
}

/// Falsy JSON values count as a missing message; other non-strings are unusable.
pub(crate) fn message_text(value: Option<Value>) -> Result<String, MessageError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            Err(MessageError::Missing)
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(MessageError::Missing),
        Some(_) => Err(MessageError::NotText),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChatResponse {
    pub(crate) message: String,
    pub(crate) sources: Vec<String>,
    pub(crate) found_results: usize,
}

impl From<QueryResult> for ChatResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            message: format!("{}{}", ANSWER_PREFIX, result.answer_text),
            found_results: 1,
            sources: result.source_labels,
        }
    }
}

/// POST /api/chat – `{ "message": string }` in, routed answer out.
pub(crate) async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let req: ChatRequest = match parse_body("chat", &body) {
        Ok(req) => req,
        Err(res) => return res,
    };

    let message = match message_text(req.message) {
        Ok(message) => message,
        Err(MessageError::Missing) => {
            tracing::warn!("chat request without message");
            return error_response(StatusCode::BAD_REQUEST, "Message is required");
        }
        Err(MessageError::NotText) => {
            tracing::error!("chat message is not a string");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR);
        }
    };

    tracing::debug!(query = %message, "chat request");
    let (rule, result) = state.router.route_with_rule(&message);
    tracing::info!(topic = %result.topic, rule = rule.name, chars = message.len(), "chat answered");

    Json(ChatResponse::from(result)).into_response()
}
