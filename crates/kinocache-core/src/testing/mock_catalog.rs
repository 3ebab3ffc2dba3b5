//! Mock film catalog for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::api::{ApiError, FilmCatalog};
use crate::models::{Film, FiltersTaxonomy};

/// A recorded catalog call for test assertions.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    TopFilms,
    Filters,
    FilmDetails { film_id: i64 },
}

/// Mock implementation of the `FilmCatalog` trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable film/filter results
/// - Track calls for assertions
/// - Fail the next operation with an injected error
#[derive(Debug, Default)]
pub struct MockCatalog {
    films: Arc<RwLock<Vec<Film>>>,
    filters: Arc<RwLock<FiltersTaxonomy>>,
    details: Arc<RwLock<HashMap<i64, Film>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    /// If set, the next operation fails with this error.
    next_error: Arc<RwLock<Option<ApiError>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_films(&self, films: Vec<Film>) {
        *self.films.write().await = films;
    }

    pub async fn set_filters(&self, filters: FiltersTaxonomy) {
        *self.filters.write().await = filters;
    }

    pub async fn add_detail(&self, film: Film) {
        self.details.write().await.insert(film.film_id, film);
    }

    pub async fn fail_next(&self, error: ApiError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: RecordedCall) -> Result<(), ApiError> {
        self.calls.write().await.push(call);
        match self.next_error.write().await.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FilmCatalog for MockCatalog {
    async fn fetch_top_films(&self) -> Result<Vec<Film>, ApiError> {
        self.record(RecordedCall::TopFilms).await?;
        Ok(self.films.read().await.clone())
    }

    async fn fetch_filters(&self) -> Result<FiltersTaxonomy, ApiError> {
        self.record(RecordedCall::Filters).await?;
        Ok(self.filters.read().await.clone())
    }

    async fn fetch_film_details(&self, film_id: i64) -> Result<Film, ApiError> {
        self.record(RecordedCall::FilmDetails { film_id }).await?;
        self.details
            .read()
            .await
            .get(&film_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("film {}", film_id)))
    }
}
