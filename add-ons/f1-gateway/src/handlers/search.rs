//! Search handler over the chunked lexical index.

use super::{error_response, parse_body};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use f1_core::{CoreError, SearchHit};
use serde::{Deserialize, Serialize};

/// Upper bound on `limit` regardless of what the client asks for.
pub(crate) const MAX_SEARCH_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    #[serde(default)]
    pub(crate) query: Option<String>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResult {
    rank: usize,
    score: f32,
    text: String,
    title: String,
    category: String,
    source: String,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            rank: hit.rank,
            score: hit.score,
            text: hit.chunk.text,
            title: hit.chunk.title,
            category: hit.chunk.category,
            source: hit.chunk.source,
        }
    }
}

/// POST /api/search – `{ "query": string, "limit"?: number }`.
pub(crate) async fn search(State(state): State<AppState>, body: Bytes) -> Response {
    let req: SearchRequest = match parse_body("search", &body) {
        Ok(req) => req,
        Err(res) => return res,
    };

    let Some(query) = req.query.filter(|q| !q.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Query is required");
    };
    let limit = req
        .limit
        .unwrap_or(state.config.search_limit)
        .min(MAX_SEARCH_LIMIT);

    match state.index.search(&query, limit) {
        Ok(hits) => {
            tracing::info!(hits = hits.len(), limit, "search served");
            let results: Vec<SearchResult> = hits.into_iter().map(SearchResult::from).collect();
            Json(serde_json::json!({
                "query": query,
                "count": results.len(),
                "results": results,
            }))
            .into_response()
        }
        Err(CoreError::EmptyQuery) => {
            error_response(StatusCode::BAD_REQUEST, "Query has no searchable terms")
        }
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, super::GENERIC_ERROR)
        }
    }
}
