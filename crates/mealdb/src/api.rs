//! REST client for TheMealDB search endpoint.

use std::time::Duration;

use crate::models::{Meal, SearchResponse};

/// Public MealDB API root (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from the MealDB REST layer.
#[derive(Debug, thiserror::Error)]
pub enum MealDbError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// MealDB returned a non-2xx status code.
    #[error("MealDB API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// HTTP client for a MealDB-compatible API.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Build a client for `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MealDbError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /search.php?s=<query>`: meals whose name matches `query`.
    ///
    /// An empty list when MealDB reports no matches.
    pub async fn search_meals(&self, query: &str) -> Result<Vec<Meal>, MealDbError> {
        let response = self
            .client
            .get(format!("{}/search.php", self.base_url))
            .query(&[("s", query)])
            .send()
            .await?;

        let body: SearchResponse = Self::parse_response(response).await?;
        Ok(body.meals.unwrap_or_default())
    }

    /// Return the response unchanged on success, or an
    /// [`MealDbError::ApiError`] carrying status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MealDbError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MealDbError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MealDbError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
