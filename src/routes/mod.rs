//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - legacy form endpoints `/start_quiz` and `/check_answer` (same handlers, defaulted mode)
/// - API under `/api/v1/...`
/// - front-end page from `static_dir` with index fallback
/// - optional permissive CORS
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    let static_service = ServeDir::new(&static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(format!("{static_dir}/index.html")));
    let cors_allow_any = state.config.cors_allow_any;

    let router = Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // Legacy paths
        .route("/start_quiz", post(http::http_start_quiz))
        .route("/check_answer", post(http::http_check_answer))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/mapping", get(http::http_get_mapping))
        .route("/api/v1/quiz/start", post(http::http_start_quiz))
        .route("/api/v1/quiz/answer", post(http::http_check_answer))
        .route("/api/v1/quiz/summary", post(http::http_post_summary))
        .with_state(state);

    let router = if cors_allow_any {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
