//! Admin handlers for the MealDB search cache.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub message: &'static str,
    pub cleared: usize,
}

#[derive(Debug, Serialize)]
pub struct CacheHealthResponse {
    pub healthy: bool,
    pub service: &'static str,
}

/// GET /admin/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.mealdb.cache().stats().await)
}

/// DELETE /admin/cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> impl IntoResponse {
    let response = match state.mealdb.cache().clear().await {
        Some(cleared) => ClearCacheResponse {
            success: true,
            message: "Cache cleared",
            cleared,
        },
        None => ClearCacheResponse {
            success: false,
            message: "Cache clear failed",
            cleared: 0,
        },
    };
    Json(response)
}

/// GET /admin/cache/health
pub async fn cache_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(CacheHealthResponse {
        healthy: state.mealdb.cache().health_check(),
        service: recipebox_mealdb::cache::CACHE_BACKEND,
    })
}
