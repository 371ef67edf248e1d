//! Axum router configuration with middleware.
//!
//! Route paths keep their trailing slashes; requests without the slash are
//! not redirected. Middleware: CORS (wide open) and request tracing.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api_root))
        .route(
            "/api/superior_chat/",
            post(handlers::chat::superior_chat).fallback(method_not_allowed),
        )
        .route("/api/health/", get(health_check))
        .route("/health/", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api/health/ and /health/ - liveness probe, no dependency checks.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET / - static welcome payload.
async fn api_root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Superior Chatbot API!" }))
}

/// Any non-POST method on the chat endpoint.
async fn method_not_allowed() -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Only POST requests are allowed." })),
    )
}
