use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use recipebox_db::StorageBackend;
use recipebox_mealdb::{api, cache};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development and for the
/// container image, which listens on `0.0.0.0:8000`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Recipe storage backend (default: in-memory).
    pub storage: StorageBackend,
    /// MealDB API root.
    pub mealdb_base_url: String,
    /// Per-request MealDB timeout in seconds (default: `5`).
    pub mealdb_timeout_secs: u64,
    /// Whether MealDB search results are cached (default: `true`).
    pub cache_enabled: bool,
    /// Search cache TTL in seconds (default: one day).
    pub cache_ttl_secs: u64,
    /// Maximum number of cached searches (default: `1000`).
    pub cache_max_entries: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `8000`                                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `RECIPE_STORAGE`       | `memory` (`memory` or `sqlite`)           |
    /// | `DATABASE_URL`         | `sqlite://recipes.db`                     |
    /// | `MEALDB_BASE_URL`      | `https://www.themealdb.com/api/json/v1/1` |
    /// | `MEALDB_TIMEOUT_SECS`  | `5`                                       |
    /// | `CACHE_ENABLED`        | `true`                                    |
    /// | `CACHE_TTL_SECS`       | `86400`                                   |
    /// | `CACHE_MAX_ENTRIES`    | `1000`                                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same parsing as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        host.parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
            key: "HOST",
            value: host.clone(),
            reason: e.to_string(),
        })?;

        let port = parse_var(&lookup, "PORT", 8000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::InvalidCorsOrigin(bad.clone()));
        }

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let storage = match lookup("RECIPE_STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => StorageBackend::Memory,
            Some("sqlite") => StorageBackend::Sqlite {
                url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://recipes.db".into()),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RECIPE_STORAGE",
                    value: other.to_string(),
                    reason: "expected 'memory' or 'sqlite'".into(),
                })
            }
        };

        let mealdb_base_url = lookup("MEALDB_BASE_URL")
            .unwrap_or_else(|| api::DEFAULT_BASE_URL.into());
        let mealdb_timeout_secs =
            parse_var(&lookup, "MEALDB_TIMEOUT_SECS", api::DEFAULT_TIMEOUT.as_secs())?;
        let cache_enabled = parse_flag(&lookup, "CACHE_ENABLED", true)?;
        let cache_ttl_secs = parse_var(&lookup, "CACHE_TTL_SECS", cache::DEFAULT_TTL.as_secs())?;
        let cache_max_entries =
            parse_var(&lookup, "CACHE_MAX_ENTRIES", cache::DEFAULT_MAX_ENTRIES)?;
        if cache_max_entries == 0 {
            return Err(ConfigError::Invalid {
                key: "CACHE_MAX_ENTRIES",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            mealdb_base_url,
            mealdb_timeout_secs,
            cache_enabled,
            cache_ttl_secs,
            cache_max_entries,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self.host.parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
            key: "HOST",
            value: self.host.clone(),
            reason: e.to_string(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn mealdb_timeout(&self) -> Duration {
        Duration::from_secs(self.mealdb_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "expected a boolean".into(),
        }),
    }
}
