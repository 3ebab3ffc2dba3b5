//! Application state management for Kinocache.
//!
//! This module contains the `App` struct that drives the core services and
//! holds all UI state. Background loads run in spawned tasks and post
//! their results over an MPSC channel; the main loop drains the channel
//! and applies results, tagged with a generation counter so results from
//! superseded loads are discarded.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use kinocache_core::api::{ApiError, KinopoiskClient};
use kinocache_core::cache::CacheStore;
use kinocache_core::catalog::CatalogSynchronizer;
use kinocache_core::favorites::FavoritesStore;
use kinocache_core::models::{Country, Film, FiltersTaxonomy, Genre};

use crate::config::{Config, API_KEY_ENV};
use crate::utils::eq_ignore_case;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// A load produces at most a handful of messages; 32 leaves headroom.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Number of items to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Films,
    Favorites,
}

impl Tab {
    /// Get the display title for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Films => "Films",
            Tab::Favorites => "Favorites",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Films => Tab::Favorites,
            Tab::Favorites => Tab::Films,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingClearFavorites,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Result types from background load tasks.
///
/// Films and filters carry the generation that started the load; a result
/// whose generation no longer matches the current one belongs to a
/// superseded operation and is dropped. Details are tagged with the film
/// id instead and are dropped when the detail panel has moved on.
enum LoadResult {
    Films {
        generation: u64,
        result: Result<Vec<Film>, ApiError>,
    },
    Filters {
        generation: u64,
        result: Result<FiltersTaxonomy, ApiError>,
    },
    FilmDetails {
        film_id: i64,
        result: Result<Film, ApiError>,
    },
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    sync: Arc<CatalogSynchronizer<KinopoiskClient>>,
    favorites: Arc<FavoritesStore>,

    // UI state
    pub state: AppState,
    pub current_tab: Tab,

    // Catalog data
    pub films: Vec<Film>,
    /// Taxonomy with the "all" sentinel at index 0
    pub genres: Vec<Genre>,
    pub countries: Vec<Country>,
    pub selected_genre: usize,
    pub selected_country: usize,

    // Selection state
    pub film_selection: usize,
    pub favorites_selection: usize,

    // Favorites projection for display
    pub favorite_films: Vec<Film>,
    favorite_ids: HashSet<i64>,

    /// Enriched record for the detail panel, fetched on demand
    pub details: Option<Film>,

    // Load state
    pub is_loading_films: bool,
    pub is_loading_filters: bool,
    films_generation: u64,
    filters_generation: u64,

    // Background task channel
    rx: mpsc::Receiver<LoadResult>,
    tx: mpsc::Sender<LoadResult>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let cache_dir = config.cache_dir()?;
        debug!(?cache_dir, "Cache directory configured");

        let api_key = config.resolve_api_key();
        let client = KinopoiskClient::new(api_key.clone().unwrap_or_default())?;

        let films_cache = CacheStore::new(&cache_dir, "films")?;
        let filters_cache = CacheStore::new(&cache_dir, "filters")?;
        let favorites_cache = CacheStore::new(&cache_dir, "favorites")?;

        let sync = Arc::new(CatalogSynchronizer::new(client, films_cache, filters_cache));
        let favorites = Arc::new(FavoritesStore::new(favorites_cache));

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let status_message = if api_key.is_none() {
            warn!("No API key configured");
            Some(format!(
                "No API key configured (set {}) - showing cached data only",
                API_KEY_ENV
            ))
        } else {
            None
        };

        Ok(Self {
            sync,
            favorites,

            state: AppState::Normal,
            current_tab: Tab::Films,

            films: Vec::new(),
            genres: vec![Genre::all()],
            countries: vec![Country::all()],
            selected_genre: 0,
            selected_country: 0,

            film_selection: 0,
            favorites_selection: 0,

            favorite_films: Vec::new(),
            favorite_ids: HashSet::new(),

            details: None,

            is_loading_films: false,
            is_loading_filters: false,
            films_generation: 0,
            filters_generation: 0,

            rx,
            tx,

            status_message,
        })
    }

    /// Load favorites from disk and start the initial catalog load.
    pub async fn init(&mut self) {
        self.favorites.load().await;
        self.refresh_favorites_view().await;
        self.load_all();
    }

    // =========================================================================
    // Background Loads
    // =========================================================================

    /// Load films and filters together in one background task.
    pub fn load_all(&mut self) {
        if self.is_loading_films || self.is_loading_filters {
            debug!("Load already in flight, ignoring trigger");
            return;
        }

        self.is_loading_films = true;
        self.is_loading_filters = true;
        self.films_generation += 1;
        self.filters_generation += 1;
        let films_generation = self.films_generation;
        let filters_generation = self.filters_generation;

        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let (films, filters) = futures::join!(sync.films(), sync.filters());
            Self::send_result(
                &tx,
                LoadResult::Films {
                    generation: films_generation,
                    result: films,
                },
            )
            .await;
            Self::send_result(
                &tx,
                LoadResult::Filters {
                    generation: filters_generation,
                    result: filters,
                },
            )
            .await;
        });
    }

    /// Load the film list through the cache-first path. Reentrant triggers
    /// (e.g. repeated filter changes) are ignored while a load is running.
    pub fn load_films(&mut self) {
        if self.is_loading_films {
            debug!("Film load already in flight, ignoring trigger");
            return;
        }

        self.is_loading_films = true;
        self.films_generation += 1;
        let generation = self.films_generation;

        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = sync.films().await;
            Self::send_result(&tx, LoadResult::Films { generation, result }).await;
        });
    }

    /// Load the filter taxonomy through the cache-first path.
    pub fn load_filters(&mut self) {
        if self.is_loading_filters {
            debug!("Filter load already in flight, ignoring trigger");
            return;
        }

        self.is_loading_filters = true;
        self.filters_generation += 1;
        let generation = self.filters_generation;

        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = sync.filters().await;
            Self::send_result(&tx, LoadResult::Filters { generation, result }).await;
        });
    }

    /// Force a refetch of the film list. Unlike `load_films`, this starts a
    /// new logical operation even while a load is in flight; the older
    /// load's result arrives with a stale generation and is discarded.
    pub fn refresh(&mut self) {
        self.is_loading_films = true;
        self.films_generation += 1;
        let generation = self.films_generation;

        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = sync.refresh_films().await;
            Self::send_result(&tx, LoadResult::Films { generation, result }).await;
        });

        // Filters stay cache-first on refresh
        self.load_filters();
        self.status_message = Some("Refreshing...".to_string());
    }

    /// Open the detail panel for the selected film and fetch the full
    /// record in the background.
    pub fn open_details(&mut self) {
        let Some(film) = self.selected_film().cloned() else {
            return;
        };

        let film_id = film.film_id;
        self.details = Some(film);

        if film_id <= 0 {
            return;
        }

        let sync = Arc::clone(&self.sync);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = sync.film_details(film_id).await;
            Self::send_result(&tx, LoadResult::FilmDetails { film_id, result }).await;
        });
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    /// Helper to send load results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<LoadResult>, result: LoadResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send load result - channel closed");
        }
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.rx.try_recv() {
            results.push(result);
        }

        for result in results {
            self.process_load_result(result);
        }
    }

    /// Apply a single load result. Results from superseded operations are
    /// discarded; errors leave previously displayed data untouched.
    fn process_load_result(&mut self, result: LoadResult) {
        match result {
            LoadResult::Films { generation, result } => {
                if generation != self.films_generation {
                    debug!(
                        generation,
                        current = self.films_generation,
                        "Discarding stale film load result"
                    );
                    return;
                }
                self.is_loading_films = false;

                match result {
                    Ok(films) => {
                        info!(count = films.len(), "Films loaded");
                        self.films = films;
                        self.annotate_favorites();
                        self.clamp_selections();
                        self.status_message = if self.films.is_empty() {
                            Some("No films found".to_string())
                        } else {
                            None
                        };
                    }
                    Err(e) => {
                        error!(error = %e, "Films failed to load");
                        self.status_message = Some(format!("Films failed to load: {}", e));
                    }
                }
            }
            LoadResult::Filters { generation, result } => {
                if generation != self.filters_generation {
                    debug!(
                        generation,
                        current = self.filters_generation,
                        "Discarding stale filter load result"
                    );
                    return;
                }
                self.is_loading_filters = false;

                match result {
                    Ok(filters) => {
                        debug!(
                            genres = filters.genres.len(),
                            countries = filters.countries.len(),
                            "Filters loaded"
                        );
                        self.set_taxonomy(filters);
                    }
                    Err(e) => {
                        error!(error = %e, "Filters failed to load");
                        self.status_message = Some(format!("Filters failed to load: {}", e));
                    }
                }
            }
            LoadResult::FilmDetails { film_id, result } => match result {
                Ok(mut film) => {
                    if self.details.as_ref().is_some_and(|d| d.film_id == film_id) {
                        film.is_favorite = self.favorite_ids.contains(&film.film_id);
                        self.details = Some(film);
                    } else {
                        debug!(film_id, "Discarding stale film detail result");
                    }
                }
                Err(e) => {
                    warn!(film_id, error = %e, "Film details failed to load");
                    self.status_message = Some(format!("Film details failed to load: {}", e));
                }
            },
        }
    }

    /// Replace the taxonomy collections, prepending the "all" sentinels.
    /// Entries without a display name are useless for filtering and are
    /// dropped.
    fn set_taxonomy(&mut self, filters: FiltersTaxonomy) {
        self.genres = std::iter::once(Genre::all())
            .chain(
                filters
                    .genres
                    .into_iter()
                    .filter(|g| g.name.as_deref().is_some_and(|n| !n.is_empty())),
            )
            .collect();
        self.countries = std::iter::once(Country::all())
            .chain(
                filters
                    .countries
                    .into_iter()
                    .filter(|c| c.name.as_deref().is_some_and(|n| !n.is_empty())),
            )
            .collect();
        self.selected_genre = 0;
        self.selected_country = 0;
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Toggle favorite state for the selected film. The in-memory change
    /// sticks even when persistence fails; the failure is surfaced in the
    /// status line.
    pub async fn toggle_favorite(&mut self) {
        let Some(film) = self.selected_film().cloned() else {
            return;
        };

        let result = if self.favorite_ids.contains(&film.film_id) {
            self.favorites.remove(film.film_id).await.map(|_| ())
        } else {
            self.favorites.add(&film).await.map(|_| ())
        };

        if let Err(e) = result {
            error!(error = %e, "Failed to persist favorites");
            self.status_message = Some(format!("Failed to save favorites: {}", e));
        }

        self.refresh_favorites_view().await;
    }

    /// Empty the favorites set (after user confirmation).
    pub async fn clear_favorites(&mut self) {
        if let Err(e) = self.favorites.clear().await {
            error!(error = %e, "Failed to persist favorites");
            self.status_message = Some(format!("Failed to save favorites: {}", e));
        }
        self.refresh_favorites_view().await;
    }

    /// Refresh the favorites projection and re-annotate displayed films.
    pub async fn refresh_favorites_view(&mut self) {
        self.favorite_ids = self.favorites.ids().await;
        self.favorite_films = self.favorites.list().await;
        self.annotate_favorites();
        self.clamp_selections();
    }

    /// Recompute the favorite flag on every displayed film.
    fn annotate_favorites(&mut self) {
        for film in &mut self.films {
            film.is_favorite = self.favorite_ids.contains(&film.film_id);
        }
        for film in &mut self.favorite_films {
            film.is_favorite = true;
        }
        if let Some(ref mut film) = self.details {
            film.is_favorite = self.favorite_ids.contains(&film.film_id);
        }
    }

    // =========================================================================
    // Selection and Filtering
    // =========================================================================

    /// Films passing the current genre/country filters, in catalog order.
    pub fn visible_films(&self) -> Vec<&Film> {
        filter_films(
            &self.films,
            self.genres.get(self.selected_genre),
            self.countries.get(self.selected_country),
        )
    }

    /// The film under the cursor on the current tab.
    pub fn selected_film(&self) -> Option<&Film> {
        match self.current_tab {
            Tab::Films => self.visible_films().get(self.film_selection).copied(),
            Tab::Favorites => self.favorite_films.get(self.favorites_selection),
        }
    }

    /// The record to show in the detail panel: the enriched fetch when it
    /// matches the selection, the list record otherwise.
    pub fn detail_film(&self) -> Option<&Film> {
        let selected = self.selected_film()?;
        match self.details {
            Some(ref details) if details.film_id == selected.film_id => Some(details),
            _ => Some(selected),
        }
    }

    fn current_list_len(&self) -> usize {
        match self.current_tab {
            Tab::Films => self.visible_films().len(),
            Tab::Favorites => self.favorite_films.len(),
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let max = len as isize - 1;
        match self.current_tab {
            Tab::Films => {
                self.film_selection =
                    (self.film_selection as isize + delta).clamp(0, max) as usize;
            }
            Tab::Favorites => {
                self.favorites_selection =
                    (self.favorites_selection as isize + delta).clamp(0, max) as usize;
            }
        }
    }

    pub fn select_first(&mut self) {
        match self.current_tab {
            Tab::Films => self.film_selection = 0,
            Tab::Favorites => self.favorites_selection = 0,
        }
    }

    pub fn select_last(&mut self) {
        let len = self.current_list_len();
        match self.current_tab {
            Tab::Films => self.film_selection = len.saturating_sub(1),
            Tab::Favorites => self.favorites_selection = len.saturating_sub(1),
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.current_tab != tab {
            self.current_tab = tab;
            self.details = None;
        }
    }

    /// Select the next genre filter. The list reloads through the
    /// cache-first path; reentrant triggers are ignored while loading.
    pub fn cycle_genre(&mut self) {
        if self.genres.len() > 1 {
            self.selected_genre = (self.selected_genre + 1) % self.genres.len();
            self.film_selection = 0;
            self.load_films();
        }
    }

    /// Select the next country filter.
    pub fn cycle_country(&mut self) {
        if self.countries.len() > 1 {
            self.selected_country = (self.selected_country + 1) % self.countries.len();
            self.film_selection = 0;
            self.load_films();
        }
    }

    fn clamp_selections(&mut self) {
        let films_len = self.visible_films().len();
        if self.film_selection >= films_len {
            self.film_selection = films_len.saturating_sub(1);
        }
        if self.favorites_selection >= self.favorite_films.len() {
            self.favorites_selection = self.favorite_films.len().saturating_sub(1);
        }
    }
}

// ============================================================================
// Client-side filtering
// ============================================================================

/// Apply the selected genre/country filters over a synchronized film list.
/// Matching is a case-insensitive exact comparison on the display name;
/// the "all" sentinel (or no selection) filters nothing.
fn filter_films<'a>(
    films: &'a [Film],
    genre: Option<&Genre>,
    country: Option<&Country>,
) -> Vec<&'a Film> {
    films
        .iter()
        .filter(|film| matches_genre(film, genre) && matches_country(film, country))
        .collect()
}

fn matches_genre(film: &Film, selected: Option<&Genre>) -> bool {
    let Some(selected) = selected else { return true };
    if selected.is_all() {
        return true;
    }
    let Some(name) = selected.name.as_deref() else {
        return true;
    };
    film.genres
        .iter()
        .any(|g| g.name.as_deref().is_some_and(|n| eq_ignore_case(n, name)))
}

fn matches_country(film: &Film, selected: Option<&Country>) -> bool {
    let Some(selected) = selected else { return true };
    if selected.is_all() {
        return true;
    }
    let Some(name) = selected.name.as_deref() else {
        return true;
    };
    film.countries
        .iter()
        .any(|c| c.name.as_deref().is_some_and(|n| eq_ignore_case(n, name)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kinocache_core::testing::film;
    use std::path::Path;

    fn film_with(id: i64, title: &str, genre: &str, country: &str) -> Film {
        let mut film = film(id, title);
        film.genres = vec![Genre {
            id: None,
            name: Some(genre.to_string()),
        }];
        film.countries = vec![Country {
            id: None,
            name: Some(country.to_string()),
        }];
        film
    }

    fn test_app(dir: &Path) -> App {
        let config = Config {
            api_key: Some("test-key".to_string()),
            cache_dir: Some(dir.to_path_buf()),
        };
        App::new(config).unwrap()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    #[test]
    fn test_filter_films_matches_case_insensitively() {
        let films = vec![
            film_with(1, "Один", "Драма", "США"),
            film_with(2, "Два", "комедия", "Россия"),
        ];
        let genre = Genre {
            id: Some(3),
            name: Some("драма".to_string()),
        };

        let visible = filter_films(&films, Some(&genre), None);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].film_id, 1);
    }

    #[test]
    fn test_filter_films_sentinel_filters_nothing() {
        let films = vec![
            film_with(1, "Один", "драма", "США"),
            film_with(2, "Два", "комедия", "Россия"),
        ];

        let visible = filter_films(&films, Some(&Genre::all()), Some(&Country::all()));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_filter_films_combines_genre_and_country() {
        let films = vec![
            film_with(1, "Один", "драма", "США"),
            film_with(2, "Два", "драма", "Россия"),
            film_with(3, "Три", "комедия", "Россия"),
        ];
        let genre = Genre {
            id: None,
            name: Some("драма".to_string()),
        };
        let country = Country {
            id: None,
            name: Some("россия".to_string()),
        };

        let visible = filter_films(&films, Some(&genre), Some(&country));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].film_id, 2);
    }

    #[test]
    fn test_filter_requires_exact_name_match() {
        let films = vec![film_with(1, "Один", "драма", "США")];
        let genre = Genre {
            id: None,
            name: Some("драм".to_string()),
        };

        assert!(filter_films(&films, Some(&genre), None).is_empty());
    }

    // -------------------------------------------------------------------------
    // Tab Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Films.next(), Tab::Favorites);
        assert_eq!(Tab::Favorites.next(), Tab::Films);
        assert_eq!(Tab::Films.prev(), Tab::Favorites);
    }

    // -------------------------------------------------------------------------
    // Load Result Processing
    // -------------------------------------------------------------------------

    #[test]
    fn test_stale_film_results_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.films = vec![film(1, "Один")];
        app.films_generation = 3;
        app.is_loading_films = true;

        app.process_load_result(LoadResult::Films {
            generation: 2,
            result: Ok(vec![film(9, "Девять")]),
        });

        // The superseded result changed nothing
        assert_eq!(app.films.len(), 1);
        assert_eq!(app.films[0].film_id, 1);
        assert!(app.is_loading_films);
    }

    #[test]
    fn test_film_load_error_leaves_displayed_data_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.films = vec![film(1, "Один")];
        app.films_generation = 1;
        app.is_loading_films = true;

        app.process_load_result(LoadResult::Films {
            generation: 1,
            result: Err(ApiError::UpstreamMisconfigured),
        });

        assert_eq!(app.films.len(), 1);
        assert!(!app.is_loading_films);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Films failed to load")));
    }

    #[test]
    fn test_taxonomy_gets_sentinel_and_drops_nameless_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        let filters: FiltersTaxonomy = serde_json::from_str(
            r#"{
                "genres": [{"id": 1, "genre": "драма"}, {"id": 2}, {"id": 3, "genre": ""}],
                "countries": [{"id": 1, "country": "США"}]
            }"#,
        )
        .unwrap();

        app.filters_generation = 1;
        app.process_load_result(LoadResult::Filters {
            generation: 1,
            result: Ok(filters),
        });

        assert_eq!(app.genres.len(), 2);
        assert!(app.genres[0].is_all());
        assert_eq!(app.genres[1].name.as_deref(), Some("драма"));
        assert_eq!(app.countries.len(), 2);
    }

    #[test]
    fn test_stale_detail_results_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        // Detail panel shows film 2; a late result for film 1 arrives
        app.details = Some(film(2, "Два"));
        app.process_load_result(LoadResult::FilmDetails {
            film_id: 1,
            result: Ok(film(1, "Один")),
        });

        assert_eq!(app.details.as_ref().unwrap().film_id, 2);
    }

    #[tokio::test]
    async fn test_reentrant_film_loads_are_ignored() {
        let dir = tempfile::tempdir().unwrap();

        // Warm the cache so the load completes without the network
        let warm: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        warm.save(&vec![film(5, "Пять")]).await.unwrap();

        let mut app = test_app(dir.path());
        app.load_films();
        let generation = app.films_generation;
        assert!(app.is_loading_films);

        // A second trigger while loading is a no-op
        app.load_films();
        assert_eq!(app.films_generation, generation);

        // Drain the background task
        for _ in 0..100 {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            app.check_background_tasks();
            if !app.is_loading_films {
                break;
            }
        }
        assert!(!app.is_loading_films);
        assert_eq!(app.films.len(), 1);
        assert_eq!(app.films[0].film_id, 5);
    }

    #[tokio::test]
    async fn test_favorite_annotation_on_displayed_films() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.films = vec![film(1, "Один"), film(2, "Два")];
        app.favorites.add(&film(2, "Два")).await.unwrap();
        app.refresh_favorites_view().await;

        assert!(!app.films[0].is_favorite);
        assert!(app.films[1].is_favorite);
        assert_eq!(app.favorite_films.len(), 1);
        assert!(app.favorite_films[0].is_favorite);
    }
}
