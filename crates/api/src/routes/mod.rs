pub mod admin;
pub mod health;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /ping, /health                 liveness and health
/// /recipes/...                   recipe CRUD and search
/// /admin/cache/...               search cache administration
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(recipes::router())
        .nest("/admin", admin::router())
}
