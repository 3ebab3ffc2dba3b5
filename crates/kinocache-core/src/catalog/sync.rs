//! Catalog synchronizer.
//!
//! One protocol for both catalog datasets: try the cache, fall through to
//! the remote client on a miss, persist what came back, return it. Cache
//! read failures degrade to a miss; cache write failures after a
//! successful fetch are logged and swallowed because the caller already
//! holds valid data. Remote failures propagate unchanged and are never
//! retried here.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::api::{ApiError, FilmCatalog};
use crate::cache::CacheStore;
use crate::models::{Film, FiltersTaxonomy};

pub struct CatalogSynchronizer<C> {
    client: C,
    films_cache: CacheStore<Vec<Film>>,
    filters_cache: CacheStore<FiltersTaxonomy>,
}

impl<C: FilmCatalog> CatalogSynchronizer<C> {
    pub fn new(
        client: C,
        films_cache: CacheStore<Vec<Film>>,
        filters_cache: CacheStore<FiltersTaxonomy>,
    ) -> Self {
        Self {
            client,
            films_cache,
            filters_cache,
        }
    }

    /// Get the film list, cache first. A cached non-empty list is returned
    /// verbatim with no freshness check.
    pub async fn films(&self) -> Result<Vec<Film>, ApiError> {
        match self.films_cache.load().await {
            Ok(Some(films)) if !films.is_empty() => {
                debug!(count = films.len(), "Serving films from cache");
                return Ok(films);
            }
            Ok(_) => debug!("Film cache miss"),
            Err(e) => warn!(error = %e, "Film cache unreadable, falling back to remote"),
        }

        self.fetch_and_cache_films().await
    }

    /// Force a refetch: drop the film cache, then go straight to the
    /// remote. The fetch happens unconditionally so a failed clear cannot
    /// turn a forced refresh back into a cache hit.
    pub async fn refresh_films(&self) -> Result<Vec<Film>, ApiError> {
        if let Err(e) = self.films_cache.clear().await {
            warn!(error = %e, "Failed to clear film cache before refresh");
        }
        self.fetch_and_cache_films().await
    }

    /// Get the filter taxonomy, cache first.
    pub async fn filters(&self) -> Result<FiltersTaxonomy, ApiError> {
        match self.filters_cache.load().await {
            Ok(Some(filters)) if !filters.is_empty() => {
                debug!(
                    genres = filters.genres.len(),
                    countries = filters.countries.len(),
                    "Serving filters from cache"
                );
                return Ok(filters);
            }
            Ok(_) => debug!("Filter cache miss"),
            Err(e) => warn!(error = %e, "Filter cache unreadable, falling back to remote"),
        }

        let filters = self.client.fetch_filters().await?;
        if let Err(e) = self.filters_cache.save(&filters).await {
            warn!(error = %e, "Failed to persist filter cache");
        }
        Ok(filters)
    }

    /// Fetch the full record for one film. Details are not cached.
    pub async fn film_details(&self, film_id: i64) -> Result<Film, ApiError> {
        self.client.fetch_film_details(film_id).await
    }

    async fn fetch_and_cache_films(&self) -> Result<Vec<Film>, ApiError> {
        let fetched = self.client.fetch_top_films().await?;
        let films = dedup_films(fetched);
        info!(count = films.len(), "Films fetched from remote");

        if films.is_empty() {
            debug!("Remote returned no films, skipping cache write");
            return Ok(films);
        }

        if let Err(e) = self.films_cache.save(&films).await {
            warn!(error = %e, "Failed to persist film cache");
        }
        Ok(films)
    }
}

/// Drop films without a valid id and deduplicate by film id, keeping the
/// first occurrence in received order. Remote payloads repeat films across
/// chart pages and categories.
fn dedup_films(films: Vec<Film>) -> Vec<Film> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(films.len());

    for film in films {
        if !film.has_valid_id() {
            warn!(film_id = film.film_id, "Dropping film with invalid id");
            continue;
        }
        if seen.insert(film.film_id) {
            result.push(film);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{film, MockCatalog, RecordedCall};
    use std::path::Path;

    fn synchronizer(dir: &Path, client: MockCatalog) -> CatalogSynchronizer<MockCatalog> {
        CatalogSynchronizer::new(
            client,
            CacheStore::new(dir, "films").unwrap(),
            CacheStore::new(dir, "filters").unwrap(),
        )
    }

    fn taxonomy() -> FiltersTaxonomy {
        serde_json::from_str(
            r#"{"genres": [{"id": 1, "genre": "триллер"}], "countries": [{"id": 1, "country": "США"}]}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_duplicates_are_dropped_keeping_first_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let client = MockCatalog::new();
        client
            .set_films(vec![film(1, "Один"), film(2, "Два"), film(1, "Один снова")])
            .await;
        let sync = synchronizer(dir.path(), client);

        let films = sync.films().await.unwrap();
        let ids: Vec<i64> = films.iter().map(|f| f.film_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(films[0].name_ru.as_deref(), Some("Один"));

        // Exactly the deduplicated sequence was persisted
        let on_disk: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        assert_eq!(on_disk.load().await.unwrap().unwrap(), films);
    }

    #[tokio::test]
    async fn test_invalid_ids_never_reach_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let client = MockCatalog::new();
        client
            .set_films(vec![film(0, "ноль"), film(3, "Три"), film(-1, "минус")])
            .await;
        let sync = synchronizer(dir.path(), client);

        let films = sync.films().await.unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].film_id, 3);
    }

    #[tokio::test]
    async fn test_cache_hit_never_calls_the_remote() {
        let dir = tempfile::tempdir().unwrap();
        let warm: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        warm.save(&vec![film(7, "Семь")]).await.unwrap();

        let client = MockCatalog::new();
        let sync = synchronizer(dir.path(), client);

        let films = sync.films().await.unwrap();
        assert_eq!(films[0].film_id, 7);
        assert!(sync.client.recorded_calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cached_list_counts_as_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let empty: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        empty.save(&Vec::new()).await.unwrap();

        let client = MockCatalog::new();
        client.set_films(vec![film(4, "Четыре")]).await;
        let sync = synchronizer(dir.path(), client);

        let films = sync.films().await.unwrap();
        assert_eq!(films[0].film_id, 4);
        assert_eq!(sync.client.recorded_calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_cache_falls_through_and_repairs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("films.json"), "{broken").unwrap();

        let client = MockCatalog::new();
        client.set_films(vec![film(8, "Восемь")]).await;
        let sync = synchronizer(dir.path(), client);

        let films = sync.films().await.unwrap();
        assert_eq!(films[0].film_id, 8);

        // The bad document was replaced by the fetched one
        let on_disk: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        assert_eq!(on_disk.load().await.unwrap().unwrap(), films);
    }

    #[tokio::test]
    async fn test_refresh_fetches_exactly_once_despite_warm_cache() {
        let dir = tempfile::tempdir().unwrap();
        let warm: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        warm.save(&vec![film(7, "Старый")]).await.unwrap();

        let client = MockCatalog::new();
        client.set_films(vec![film(9, "Новый")]).await;
        let sync = synchronizer(dir.path(), client);

        let films = sync.refresh_films().await.unwrap();
        assert_eq!(films[0].film_id, 9);

        let calls = sync.client.recorded_calls().await;
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], RecordedCall::TopFilms));

        let on_disk: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        assert_eq!(on_disk.load().await.unwrap().unwrap()[0].film_id, 9);
    }

    #[tokio::test]
    async fn test_remote_errors_propagate_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let client = MockCatalog::new();
        client.fail_next(ApiError::UpstreamMisconfigured).await;
        let sync = synchronizer(dir.path(), client);

        assert!(matches!(
            sync.films().await,
            Err(ApiError::UpstreamMisconfigured)
        ));

        // Nothing was written on the failure path
        let on_disk: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        assert!(on_disk.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filters_are_cache_first() {
        let dir = tempfile::tempdir().unwrap();
        let client = MockCatalog::new();
        client.set_filters(taxonomy()).await;
        let sync = synchronizer(dir.path(), client);

        let first = sync.filters().await.unwrap();
        assert_eq!(first.genres.len(), 1);
        assert_eq!(sync.client.recorded_calls().await.len(), 1);

        // Second call is served from the persisted document
        let second = sync.filters().await.unwrap();
        assert_eq!(second, first);
        assert_eq!(sync.client.recorded_calls().await.len(), 1);
    }
}
