//! HTTP client for the unofficial Kinopoisk API.
//!
//! Every operation is a single authenticated GET returning JSON. The API
//! fronts requests with a gateway that answers broken keys and bad routes
//! with an HTML page, so bodies are sniffed for HTML before parsing and
//! that case is reported as `UpstreamMisconfigured` rather than as a parse
//! failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{Film, FiltersTaxonomy};

use super::{ApiError, FilmCatalog};

/// Base URL for the film endpoints.
const DEFAULT_BASE_URL: &str = "https://kinopoiskapiunofficial.tech/api/v2.2/films";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Query for the top-films listing. The catalog shown by the app is the
/// first page of the popular-films chart.
const TOP_FILMS_QUERY: &str = "top?type=TOP_100_POPULAR_FILMS&page=1";

/// API key header name.
const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Debug, Deserialize)]
struct TopFilmsResponse {
    #[serde(rename = "pagesCount", default)]
    #[allow(dead_code)]
    pages_count: i64,
    #[serde(default)]
    films: Vec<Film>,
}

/// API client for the Kinopoisk catalog.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct KinopoiskClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl KinopoiskClient {
    /// Create a new client against the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(url, status = %status, bytes = text.len(), "API response received");

        if !status.is_success() {
            return Err(ApiError::from_status(status, &text));
        }

        if is_html_payload(&text) {
            warn!(url, "HTML payload where JSON was expected");
            return Err(ApiError::UpstreamMisconfigured);
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(url, error = %e, "Failed to parse API response");
            ApiError::MalformedResponse(e.to_string())
        })
    }
}

#[async_trait]
impl FilmCatalog for KinopoiskClient {
    async fn fetch_top_films(&self) -> Result<Vec<Film>, ApiError> {
        let url = format!("{}/{}", self.base_url, TOP_FILMS_QUERY);
        let response: TopFilmsResponse = self.get_json(&url).await?;
        Ok(response.films)
    }

    async fn fetch_filters(&self) -> Result<FiltersTaxonomy, ApiError> {
        let url = format!("{}/filters", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_film_details(&self, film_id: i64) -> Result<Film, ApiError> {
        let url = format!("{}/{}", self.base_url, film_id);
        self.get_json(&url).await
    }
}

/// Detect an HTML document where JSON was expected. A broken API key or a
/// captive gateway answers with a full HTML page rather than a JSON error.
fn is_html_payload(body: &str) -> bool {
    let trimmed = body.trim_start();
    trimmed.starts_with("<!DOCTYPE html") || trimmed.contains("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html_payload() {
        assert!(is_html_payload("<!DOCTYPE html><html><body>nope</body></html>"));
        assert!(is_html_payload("  \n<!DOCTYPE html>"));
        assert!(is_html_payload("<html lang=\"en\"><head></head></html>"));

        assert!(!is_html_payload("{\"films\": []}"));
        assert!(!is_html_payload(""));
        assert!(!is_html_payload("[1, 2, 3]"));
    }

    #[test]
    fn test_parse_top_films_envelope() {
        let json = r#"{
            "pagesCount": 5,
            "films": [
                {"filmId": 263531, "nameRu": "Мстители", "year": "2012"},
                {"filmId": 301, "nameRu": "Матрица", "year": 1999}
            ]
        }"#;
        let response: TopFilmsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.films.len(), 2);
        assert_eq!(response.films[0].film_id, 263531);
        assert_eq!(response.films[1].year.as_deref(), Some("1999"));
    }

    #[test]
    fn test_parse_top_films_envelope_tolerates_missing_fields() {
        let response: TopFilmsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.films.is_empty());
    }
}
