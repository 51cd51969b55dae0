//! Process-local recipe store.

use async_trait::async_trait;
use recipebox_core::search::{normalize_query, title_matches};
use recipebox_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::recipe::{seed_recipes, Recipe, RecipeInput};
use crate::repositories::RecipeStore;
use crate::StoreError;

struct MemoryState {
    recipes: Vec<Recipe>,
    next_id: DbId,
}

/// Keeps recipes in a vector behind a [`RwLock`]. Contents are lost on restart.
pub struct MemoryRecipeStore {
    state: RwLock<MemoryState>,
}

impl MemoryRecipeStore {
    /// A store holding the seed recipes.
    pub fn new() -> Self {
        Self::with_recipes(seed_recipes())
    }

    /// A store holding `recipes`; the next id follows the largest one present.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let next_id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(MemoryState { recipes, next_id }),
        }
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.state.read().await.recipes.clone())
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Recipe>, StoreError> {
        let state = self.state.read().await;
        Ok(state.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError> {
        let mut state = self.state.write().await;
        let recipe = Recipe::from_input(state.next_id, input);
        state.next_id += 1;
        state.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: DbId, input: RecipeInput) -> Result<Option<Recipe>, StoreError> {
        let mut state = self.state.write().await;
        let Some(slot) = state.recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        *slot = Recipe::from_input(id, input);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let before = state.recipes.len();
        state.recipes.retain(|r| r.id != id);
        Ok(state.recipes.len() < before)
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, StoreError> {
        let Some(query) = normalize_query(Some(query)) else {
            return Ok(Vec::new());
        };
        let state = self.state.read().await;
        Ok(state
            .recipes
            .iter()
            .filter(|r| title_matches(&r.title, query))
            .cloned()
            .collect())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.recipes.clear();
        state.next_id = 1;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> RecipeInput {
        RecipeInput {
            title: title.into(),
            ingredients: vec!["flour".into()],
            steps: vec!["Mix".into()],
            prep_time: "5 minutes".into(),
            cook_time: "10 minutes".into(),
            difficulty: "Easy".into(),
            cuisine: "American".into(),
        }
    }

    #[tokio::test]
    async fn ids_continue_after_seed_and_are_not_reused() {
        let store = MemoryRecipeStore::new();
        let third = store.create(input("Pancakes")).await.unwrap();
        assert_eq!(third.id, 3);

        assert!(store.delete(3).await.unwrap());
        let fourth = store.create(input("Waffles")).await.unwrap();
        assert_eq!(fourth.id, 4);
    }

    #[tokio::test]
    async fn update_keeps_position_and_id() {
        let store = MemoryRecipeStore::new();
        let updated = store.update(1, input("Carbonara v2")).await.unwrap().unwrap();
        assert_eq!(updated.id, 1);

        let all = store.get_all().await.unwrap();
        assert_eq!(all[0].title, "Carbonara v2");
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn clear_restarts_ids() {
        let store = MemoryRecipeStore::new();
        store.clear().await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
        assert_eq!(store.create(input("Fresh")).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn with_recipes_starts_after_highest_id() {
        let mut seeds = seed_recipes();
        seeds[1].id = 10;
        let store = MemoryRecipeStore::with_recipes(seeds);
        assert_eq!(store.create(input("Next")).await.unwrap().id, 11);
    }
}
