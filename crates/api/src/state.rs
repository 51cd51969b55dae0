use std::sync::Arc;

use anyhow::Context;
use recipebox_db::RecipeStore;
use recipebox_mealdb::{MealDbClient, MealDbService, SearchCache};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Recipe storage backend selected at startup.
    pub store: Arc<dyn RecipeStore>,
    /// Cached MealDB search.
    pub mealdb: Arc<MealDbService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Open the configured storage backend and MealDB client.
    pub async fn from_config(config: ServerConfig) -> anyhow::Result<Self> {
        let store = recipebox_db::open_store(&config.storage)
            .await
            .with_context(|| format!("failed to open {} storage", config.storage.name()))?;

        let cache = if config.cache_enabled {
            SearchCache::new(config.cache_ttl()).with_max_entries(config.cache_max_entries)
        } else {
            tracing::warn!("Search cache disabled");
            SearchCache::disabled()
        };

        let client = MealDbClient::new(config.mealdb_base_url.clone(), config.mealdb_timeout())
            .context("failed to build MealDB HTTP client")?;

        Ok(Self {
            store,
            mealdb: Arc::new(MealDbService::new(client, Arc::new(cache))),
            config: Arc::new(config),
        })
    }
}
