//! Router assembly for the sentiment HTTP API.
//!
//! [`build_router`] wires the handlers to their routes with body limit,
//! CORS and tracing middleware layers.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;

/// Builds the axum router with all API routes.
///
/// Bodies larger than `config.body_limit` are rejected with 413 before the
/// analyze handler runs. TraceLayer provides request-level logging via tracing.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/analyze", post(handlers::analyze::analyze))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
