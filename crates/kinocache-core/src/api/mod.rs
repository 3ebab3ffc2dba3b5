//! Kinopoisk API client.
//!
//! This module provides the `KinopoiskClient` for fetching film data from
//! the unofficial Kinopoisk API, and the `FilmCatalog` trait it implements
//! so callers can be constructed against a mock in tests.

pub mod client;
pub mod error;

pub use client::KinopoiskClient;
pub use error::ApiError;

use async_trait::async_trait;

use crate::models::{Film, FiltersTaxonomy};

/// Remote film-catalog operations.
///
/// Each call issues exactly one outbound request; failures are terminal for
/// that call and are never retried at this layer.
#[async_trait]
pub trait FilmCatalog: Send + Sync {
    /// Fetch the current top-films listing.
    async fn fetch_top_films(&self) -> Result<Vec<Film>, ApiError>;

    /// Fetch the filter taxonomy (genres and countries).
    async fn fetch_filters(&self) -> Result<FiltersTaxonomy, ApiError>;

    /// Fetch the full record for a single film.
    async fn fetch_film_details(&self, film_id: i64) -> Result<Film, ApiError>;
}
