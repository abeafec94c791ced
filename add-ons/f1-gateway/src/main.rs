//! Axum-based chat gateway for the F1 knowledge base. Config-driven via CoreConfig.

mod handlers;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use f1_core::{Chunker, CoreConfig, CoreError, DocumentIndex, QueryRouter};
use handlers::{error_response, GENERIC_ERROR};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) router: Arc<QueryRouter>,
    pub(crate) index: Arc<DocumentIndex>,
}

impl AppState {
    /// Builds the router and search index. Fails on any rule/topic or chunking defect.
    pub(crate) fn build(config: CoreConfig) -> Result<Self, CoreError> {
        let router = QueryRouter::curated()?;
        let chunker = Chunker::with_config(config.chunker_config())?;
        let index = DocumentIndex::from_source(router.store(), &chunker);
        Ok(Self {
            config: Arc::new(config),
            router: Arc::new(router),
            index: Arc::new(index),
        })
    }
}

/// Pre-flight check: config loads, rule table resolves against the topic store, port is free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    let addr = config.bind_addr();

    print!("Checking rule table... ");
    let state = AppState::build(config).map_err(|e| format!("Knowledge base invalid: {}", e))?;
    println!(
        "OK ({} topics, {} rules)",
        state.router.store().len(),
        state.router.rules().count()
    );
    println!("Search index: {} chunks", state.index.len());

    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => return Err(format!("{} BLOCKED: {}", addr, e)),
    }

    println!("\n✅ SUCCESS: Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[f1-gateway] .env not loaded: {} (using system environment)", e);
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = serve().await {
        tracing::error!(error = %e, "gateway stopped");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = CoreConfig::load()?;
    let addr = config.bind_addr();
    let app_name = config.app_name.clone();
    let state = AppState::build(config)?;
    tracing::info!(
        topics = state.router.store().len(),
        rules = state.router.rules().count(),
        chunks = state.index.len(),
        "knowledge base loaded"
    );

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("{} listening on {}", app_name, addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR)
}

fn build_app(state: AppState) -> Router {
    let cors_permissive = state.config.cors_permissive;
    let routes = Router::new()
        .route("/v1/status", get(status))
        .route("/api/v1/health", get(health))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/search", post(handlers::search::search))
        .route("/api/topics", get(list_topics))
        .route("/api/topics/:id", get(get_topic))
        .with_state(state);
    with_layers(routes, cors_permissive)
}

/// Panic guard and CORS, outermost last.
fn with_layers(routes: Router, cors_permissive: bool) -> Router {
    // Permissive by default: the chat UI usually runs on its own dev-server port.
    let origins = if cors_permissive {
        AllowOrigin::any()
    } else {
        AllowOrigin::predicate(|origin: &HeaderValue, _| {
            let s = origin.to_str().unwrap_or("");
            s.starts_with("http://localhost") || s.starts_with("http://127.0.0.1")
        })
    };
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity, rule table, index size.
async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let rules: Vec<&str> = state.router.rules().map(|r| r.name).collect();
    Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "topics": state.router.store().len(),
        "rules": rules,
        "indexed_chunks": state.index.len(),
    }))
}

/// GET /api/topics – `[{ id, title }]` in store order.
async fn list_topics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let topics: Vec<serde_json::Value> = state
        .router
        .store()
        .topics()
        .map(|t| serde_json::json!({ "id": t.id, "title": t.title }))
        .collect();
    Json(serde_json::Value::Array(topics))
}

/// GET /api/topics/:id – one topic with its body.
async fn get_topic(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.router.store().get_by_key(&id) {
        Ok(topic) => Json(topic.clone()).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, &e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use f1_core::{ANSWER_PREFIX, SOURCE_LABEL};
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_app(AppState::build(CoreConfig::default()).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_chat_routes_championship_question() {
        let body = serde_json::json!({ "message": "Who won the 2024 championship?" });
        let (status, json) = send(test_app(), post_json("/api/chat", &body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let message = json["message"].as_str().unwrap();
        assert!(message.starts_with(ANSWER_PREFIX));
        assert!(message.contains("2024 World Champion"));
        assert_eq!(json["sources"], serde_json::json!([SOURCE_LABEL]));
        assert_eq!(json["foundResults"], 1);
    }

    #[tokio::test]
    async fn test_chat_answer_is_prefix_plus_topic_body() {
        let state = AppState::build(CoreConfig::default()).unwrap();
        let expected = format!(
            "{}{}",
            ANSWER_PREFIX,
            state.router.route("How does F1 scoring work?").answer_text
        );
        let body = serde_json::json!({ "message": "How does F1 scoring work?" });
        let (status, json) = send(build_app(state), post_json("/api/chat", &body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], expected);
    }

    #[tokio::test]
    async fn test_chat_without_message_is_bad_request() {
        for body in ["{}", r#"{"message": null}"#, r#"{"message": ""}"#] {
            let (status, json) = send(test_app(), post_json("/api/chat", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["error"], "Message is required");
        }
    }

    #[tokio::test]
    async fn test_chat_falsy_message_is_bad_request() {
        for body in [r#"{"message": 0}"#, r#"{"message": false}"#] {
            let (status, json) = send(test_app(), post_json("/api/chat", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["error"], "Message is required");
        }
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_generic_server_error() {
        for body in ["not json", r#"{"message": 42}"#, r#"{"message": ["team"]}"#, ""] {
            let (status, json) = send(test_app(), post_json("/api/chat", body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert_eq!(json["error"], GENERIC_ERROR);
        }
    }

    #[tokio::test]
    async fn test_chat_off_domain_falls_back_to_news() {
        let body = serde_json::json!({ "message": "Tell me about basketball" });
        let (status, json) = send(test_app(), post_json("/api/chat", &body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("Championship Battle 2024"));
        assert!(message.contains("Upcoming Highlights"));
    }

    #[tokio::test]
    async fn test_search_returns_ranked_chunks() {
        let body = serde_json::json!({ "query": "points for each place", "limit": 2 });
        let (status, json) = send(test_app(), post_json("/api/search", &body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["query"], "points for each place");
        let results = json["results"].as_array().unwrap();
        assert!(!results.is_empty() && results.len() <= 2);
        assert_eq!(json["count"], results.len());
        assert_eq!(results[0]["rank"], 1);
        assert_eq!(results[0]["category"], "scoring");
        assert_eq!(results[0]["source"], "curated");
    }

    #[tokio::test]
    async fn test_search_default_limit_comes_from_config() {
        let config = CoreConfig {
            search_limit: 1,
            ..CoreConfig::default()
        };
        let app = build_app(AppState::build(config).unwrap());
        let body = serde_json::json!({ "query": "Red Bull" });
        let (status, json) = send(app, post_json("/api/search", &body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 1);
    }

    #[tokio::test]
    async fn test_search_rejects_missing_or_termless_query() {
        let (status, json) = send(test_app(), post_json("/api/search", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Query is required");

        let (status, json) =
            send(test_app(), post_json("/api/search", r#"{"query": "?!"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Query has no searchable terms");
    }

    #[tokio::test]
    async fn test_topics_listing_and_lookup() {
        let req = Request::builder()
            .uri("/api/topics")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(test_app(), req).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["teams", "drivers", "champions", "scoring", "rules", "news"]);

        let req = Request::builder()
            .uri("/api/topics/rules")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(test_app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "F1 Technical Regulations");

        let req = Request::builder()
            .uri("/api/topics/weather")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(test_app(), req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "unknown topic: weather");
    }

    #[tokio::test]
    async fn test_status_reports_identity_and_rules() {
        let config = CoreConfig {
            app_name: "Test Paddock".to_string(),
            port: 4000,
            ..CoreConfig::default()
        };
        let app = build_app(AppState::build(config).unwrap());
        let req = Request::builder()
            .uri("/v1/status")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["app_name"], "Test Paddock");
        assert_eq!(json["port"], 4000);
        assert_eq!(json["topics"], 6);
        assert_eq!(json["rules"][0], "championship");
        assert_eq!(json["rules"][6], "fallback");
        assert!(json["indexed_chunks"].as_u64().unwrap() >= 6);
    }

    async fn panicking_handler() -> &'static str {
        panic!("handler failure")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_generic_error() {
        let app = with_layers(Router::new().route("/boom", get(panicking_handler)), true);
        let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        let (status, json) = send(app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": GENERIC_ERROR }));
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<String> {
        let req = Request::builder()
            .uri("/api/v1/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_strict_cors_allows_only_local_origins() {
        let config = CoreConfig {
            cors_permissive: false,
            ..CoreConfig::default()
        };
        let app = build_app(AppState::build(config).unwrap());

        for origin in ["http://localhost:5173", "http://127.0.0.1:8080"] {
            assert_eq!(
                allowed_origin(app.clone(), origin).await.as_deref(),
                Some(origin)
            );
        }
        assert_eq!(allowed_origin(app, "https://example.com").await, None);
    }

    #[tokio::test]
    async fn test_permissive_cors_allows_any_origin() {
        assert_eq!(
            allowed_origin(test_app(), "https://example.com").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(test_app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[test]
    fn test_invalid_chunking_config_fails_state_build() {
        let config = CoreConfig {
            chunk_size: 10,
            chunk_overlap: 10,
            ..CoreConfig::default()
        };
        assert!(matches!(
            AppState::build(config),
            Err(CoreError::InvalidChunking { .. })
        ));
    }
}
