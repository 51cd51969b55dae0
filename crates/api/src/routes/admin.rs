use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Cache administration routes mounted at `/admin`.
///
/// ```text
/// GET    /cache/stats    -> cache_stats
/// DELETE /cache/clear    -> clear_cache
/// GET    /cache/health   -> cache_health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache/stats", get(admin::cache_stats))
        .route("/cache/clear", delete(admin::clear_cache))
        .route("/cache/health", get(admin::cache_health))
}
