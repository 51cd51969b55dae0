//! Recipe storage backends.
//!
//! Handlers depend only on [`RecipeStore`]; which implementation backs it is
//! decided once at startup (see [`crate::open_store`]).

use async_trait::async_trait;
use recipebox_core::types::DbId;

use crate::models::recipe::{Recipe, RecipeInput};
use crate::StoreError;

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryRecipeStore;
pub use sqlite_store::SqliteRecipeStore;

/// CRUD and title search over the recipe collection.
///
/// Ids are assigned by the store, increase monotonically, and are never
/// reused after a delete (until [`clear`](RecipeStore::clear)).
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Short backend identifier (`"memory"`, `"sqlite"`).
    fn backend_name(&self) -> &'static str;

    /// All recipes, ordered by id.
    async fn get_all(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn get_by_id(&self, id: DbId) -> Result<Option<Recipe>, StoreError>;

    /// Store a new recipe under a freshly assigned id.
    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError>;

    /// Replace every field of an existing recipe. `None` if `id` is unknown.
    async fn update(&self, id: DbId, input: RecipeInput) -> Result<Option<Recipe>, StoreError>;

    /// Returns `true` if a recipe was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Recipes whose title contains `query`, ignoring case, ordered by id.
    ///
    /// A blank query matches nothing.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, StoreError>;

    /// Remove every recipe and restart id assignment at 1.
    async fn clear(&self) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
