//! SHA-256 helpers used to derive stable search cache keys.

use sha2::{Digest, Sha256};

/// Namespace prefix for cached MealDB search results.
pub const SEARCH_CACHE_PREFIX: &str = "mealdb:search:";

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Cache key for a MealDB search query.
///
/// Queries differing only in letter case share a key.
pub fn search_cache_key(query: &str) -> String {
    let digest = sha256_hex(query.to_lowercase().as_bytes());
    format!("{SEARCH_CACHE_PREFIX}{digest}")
}
