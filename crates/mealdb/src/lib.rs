//! TheMealDB integration.
//!
//! Provides the REST client, conversion of MealDB meals into the recipe
//! shape served by the API, an in-process TTL cache for search results,
//! and [`MealDbService`], which ties the three together.

pub mod api;
pub mod cache;
pub mod convert;
pub mod models;
pub mod service;

pub use api::{MealDbClient, MealDbError};
pub use cache::{CacheStats, SearchCache};
pub use models::ExternalRecipe;
pub use service::MealDbService;
