//! Cached MealDB search.

use std::sync::Arc;

use recipebox_core::search::normalize_query;

use crate::api::MealDbClient;
use crate::cache::SearchCache;
use crate::convert::meal_to_recipe;
use crate::models::ExternalRecipe;

/// Searches MealDB through the shared [`SearchCache`].
///
/// Search never fails: upstream errors are logged and answered with an
/// empty list, and are not cached.
pub struct MealDbService {
    client: MealDbClient,
    cache: Arc<SearchCache>,
}

impl MealDbService {
    pub fn new(client: MealDbClient, cache: Arc<SearchCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// MealDB recipes whose name matches `query`. Blank queries return
    /// nothing without contacting MealDB.
    pub async fn search(&self, query: &str) -> Vec<ExternalRecipe> {
        let Some(query) = normalize_query(Some(query)) else {
            return Vec::new();
        };

        if let Some(cached) = self.cache.get(query).await {
            return cached;
        }

        let meals = match self.client.search_meals(query).await {
            Ok(meals) => meals,
            Err(e) => {
                tracing::warn!(query, error = %e, "MealDB search failed");
                return Vec::new();
            }
        };

        let recipes: Vec<ExternalRecipe> = meals.iter().map(meal_to_recipe).collect();
        self.cache.set(query, &recipes).await;

        tracing::info!(query, count = recipes.len(), "Fetched recipes from MealDB");
        recipes
    }
}
