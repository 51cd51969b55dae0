use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Active storage backend (`memory` or `sqlite`).
    pub storage_backend: &'static str,
    /// Whether recipe storage answers.
    pub storage_healthy: bool,
    /// Whether the search cache is usable.
    pub cache_healthy: bool,
}

/// GET /ping -- liveness probe.
async fn ping() -> Json<&'static str> {
    Json("pong")
}

/// GET /health -- service, storage, and cache health.
///
/// A disabled cache does not degrade the service; searches still work.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            false
        }
    };

    let status = if storage_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage_backend: state.store.backend_name(),
        storage_healthy,
        cache_healthy: state.mealdb.cache().health_check(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
}
