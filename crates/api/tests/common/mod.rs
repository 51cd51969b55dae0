#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use recipebox_api::config::ServerConfig;
use recipebox_api::router::build_app_router;
use recipebox_api::state::AppState;
use recipebox_core::types::DbId;
use recipebox_db::models::recipe::{Recipe, RecipeInput};
use recipebox_db::{MemoryRecipeStore, RecipeStore, SqliteRecipeStore, StorageBackend, StoreError};
use recipebox_mealdb::{MealDbClient, MealDbService, SearchCache};
use tower::ServiceExt;

/// Nothing listens on the discard port, so MealDB calls fail fast.
pub const UNREACHABLE_MEALDB: &str = "http://127.0.0.1:9";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        mealdb_base_url: UNREACHABLE_MEALDB.to_string(),
        mealdb_timeout_secs: 2,
        cache_enabled: true,
        cache_ttl_secs: 60,
        cache_max_entries: 100,
    }
}

/// Fresh SQLite store in a private in-memory database.
pub async fn sqlite_store() -> Arc<dyn RecipeStore> {
    let pool = recipebox_db::create_pool("sqlite::memory:").await.unwrap();
    recipebox_db::run_migrations(&pool).await.unwrap();
    Arc::new(SqliteRecipeStore::new(pool))
}

pub fn memory_store() -> Arc<dyn RecipeStore> {
    Arc::new(MemoryRecipeStore::new())
}

/// Build the full application router over `store`, with MealDB at
/// `mealdb_url` and the given search cache.
pub fn build_app(store: Arc<dyn RecipeStore>, mealdb_url: &str, cache: SearchCache) -> Router {
    let mut config = test_config();
    config.mealdb_base_url = mealdb_url.to_string();
    build_app_with_config(store, config, cache)
}

/// Like [`build_app`], with a caller-supplied configuration.
pub fn build_app_with_config(
    store: Arc<dyn RecipeStore>,
    config: ServerConfig,
    cache: SearchCache,
) -> Router {
    let client = MealDbClient::new(config.mealdb_base_url.clone(), Duration::from_secs(2)).unwrap();
    let state = AppState {
        store,
        mealdb: Arc::new(MealDbService::new(client, Arc::new(cache))),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Application over a fresh in-memory store; MealDB unreachable.
pub fn build_test_app() -> Router {
    build_app(memory_store(), UNREACHABLE_MEALDB, SearchCache::default())
}

// ---------------------------------------------------------------------------
// Faulty storage
// ---------------------------------------------------------------------------

/// How a [`FaultyStore`] misbehaves.
#[derive(Debug, Clone, Copy)]
pub enum Fault {
    /// `health_check` fails; everything else works.
    Unhealthy,
    /// `get_all` takes this long before answering.
    Slow(Duration),
    /// `get_all` panics.
    Panics,
}

/// Memory store with one injected fault.
pub struct FaultyStore {
    inner: MemoryRecipeStore,
    fault: Fault,
}

impl FaultyStore {
    pub fn new(fault: Fault) -> Arc<dyn RecipeStore> {
        Arc::new(Self {
            inner: MemoryRecipeStore::new(),
            fault,
        })
    }
}

#[async_trait]
impl RecipeStore for FaultyStore {
    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    async fn get_all(&self) -> Result<Vec<Recipe>, StoreError> {
        match self.fault {
            Fault::Slow(delay) => tokio::time::sleep(delay).await,
            Fault::Panics => panic!("recipe store exploded"),
            Fault::Unhealthy => {}
        }
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Recipe>, StoreError> {
        self.inner.get_by_id(id).await
    }

    async fn create(&self, input: RecipeInput) -> Result<Recipe, StoreError> {
        self.inner.create(input).await
    }

    async fn update(&self, id: DbId, input: RecipeInput) -> Result<Option<Recipe>, StoreError> {
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, StoreError> {
        self.inner.search(query).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.inner.clear().await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        match self.fault {
            Fault::Unhealthy => Err(StoreError::Corrupt {
                id: 0,
                reason: "health check failed".into(),
            }),
            _ => self.inner.health_check().await,
        }
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send `body` verbatim with the given content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
