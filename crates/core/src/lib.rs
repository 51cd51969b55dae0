//! Domain building blocks shared by the storage, MealDB, and API crates.

pub mod error;
pub mod hashing;
pub mod recipe;
pub mod search;
pub mod types;
