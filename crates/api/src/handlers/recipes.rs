//! Handlers for recipe CRUD, local title search, and MealDB search.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipebox_db::models::recipe::RecipeInput;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, RecipeId};
use crate::query::SearchParams;
use crate::state::AppState;

const ENTITY: &str = "Recipe";

/// GET /recipes
pub async fn list_recipes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = state.store.get_all().await?;
    Ok(Json(recipes))
}

/// GET /recipes/search?q=
///
/// Case-insensitive title search over stored recipes. A missing or blank
/// `q` returns an empty list.
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let recipes = state.store.search(&params.q).await?;
    Ok(Json(recipes))
}

/// GET /recipes/external/search?q=
///
/// Search TheMealDB. Upstream failures yield an empty list, never an error.
pub async fn search_external(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(state.mealdb.search(&params.q).await)
}

/// GET /recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> AppResult<impl IntoResponse> {
    let recipe = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    Ok(Json(recipe))
}

/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let recipe = state.store.create(input).await?;

    tracing::info!(recipe_id = recipe.id, title = %recipe.title, "Recipe created");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /recipes/{id}
///
/// Full replacement; every field is required.
pub async fn update_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
    ApiJson(input): ApiJson<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let recipe = state
        .store
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    tracing::info!(recipe_id = id, "Recipe updated");

    Ok(Json(recipe))
}

/// DELETE /recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(recipe_id = id, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}
