use axum::routing::get;
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Recipe routes, registered with full paths so `/recipes` itself matches.
///
/// ```text
/// GET    /recipes                   -> list_recipes
/// POST   /recipes                   -> create_recipe
/// GET    /recipes/search            -> search_recipes
/// GET    /recipes/external/search   -> search_external
/// GET    /recipes/{id}              -> get_recipe
/// PUT    /recipes/{id}              -> update_recipe
/// DELETE /recipes/{id}              -> delete_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route("/recipes/search", get(recipes::search_recipes))
        .route("/recipes/external/search", get(recipes::search_external))
        .route(
            "/recipes/{id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
}
