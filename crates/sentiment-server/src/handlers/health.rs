//! Liveness handler.

use axum::Json;

use crate::schema::health::HealthResponse;

/// Reports that the server is up.
///
/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
