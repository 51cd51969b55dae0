//! Recipe persistence: models, the [`RecipeStore`] trait, and its in-memory
//! and SQLite implementations.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub use repositories::{MemoryRecipeStore, RecipeStore, SqliteRecipeStore};

pub type DbPool = sqlx::SqlitePool;

/// Errors raised by recipe storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A stored list column did not hold a JSON array of strings.
    #[error("Corrupt recipe {id}: {reason}")]
    Corrupt { id: i64, reason: String },
}

/// Which storage backend the server runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local store, reseeded on every start.
    Memory,
    /// SQLite database at the given `sqlite://` URL.
    Sqlite { url: String },
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Sqlite { .. } => "sqlite",
        }
    }
}

/// Create a connection pool from a database URL.
///
/// The database file is created when missing. In-memory databases are
/// private to a connection, so they get a single-connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Open the configured backend, ready to serve requests.
pub async fn open_store(backend: &StorageBackend) -> Result<Arc<dyn RecipeStore>, StoreError> {
    match backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory recipe storage");
            Ok(Arc::new(MemoryRecipeStore::new()))
        }
        StorageBackend::Sqlite { url } => {
            let pool = create_pool(url).await?;
            health_check(&pool).await?;
            run_migrations(&pool).await?;
            tracing::info!(url = %url, "SQLite recipe storage ready");
            Ok(Arc::new(SqliteRecipeStore::new(pool)))
        }
    }
}
