//! Durable favorites set.
//!
//! The store exclusively owns its backing document; nothing else writes
//! `favorites.json`. Every mutation persists the full document before
//! returning, under the same write lock as the in-memory change, so memory
//! and disk never observably diverge after a successful call. When the
//! persist fails the in-memory change is kept and the error is surfaced;
//! callers reconcile by retrying or re-loading.

use std::collections::HashSet;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheError, CacheStore};
use crate::models::Film;

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Failed to persist favorites: {0}")]
    Persistence(#[from] CacheError),
}

/// Ordered favorites set, unique by film id.
pub struct FavoritesStore {
    films: RwLock<Vec<Film>>,
    store: CacheStore<Vec<Film>>,
}

impl FavoritesStore {
    pub fn new(store: CacheStore<Vec<Film>>) -> Self {
        Self {
            films: RwLock::new(Vec::new()),
            store,
        }
    }

    /// Populate the in-memory set from disk. A missing or corrupt document
    /// leaves the set empty; startup is never blocked by a bad favorites
    /// file.
    pub async fn load(&self) {
        match self.store.load().await {
            Ok(Some(films)) => {
                let mut guard = self.films.write().await;
                *guard = films.into_iter().filter(Film::has_valid_id).collect();
                debug!(count = guard.len(), "Favorites loaded");
            }
            Ok(None) => debug!("No favorites document, starting empty"),
            Err(e) => warn!(error = %e, "Failed to load favorites, starting empty"),
        }
    }

    /// Add a film. Idempotent by film id; films without a valid id are
    /// ignored. Returns whether the set changed.
    pub async fn add(&self, film: &Film) -> Result<bool, FavoritesError> {
        if !film.has_valid_id() {
            warn!(film_id = film.film_id, "Refusing to favorite film with invalid id");
            return Ok(false);
        }

        let mut films = self.films.write().await;
        if films.iter().any(|f| f.film_id == film.film_id) {
            return Ok(false);
        }

        films.push(film.clone());
        self.store.save(&films).await?;
        debug!(film_id = film.film_id, "Film added to favorites");
        Ok(true)
    }

    /// Remove all entries with the given id. Persists even when nothing
    /// was removed, keeping disk and memory trivially consistent. Returns
    /// whether the set changed.
    pub async fn remove(&self, film_id: i64) -> Result<bool, FavoritesError> {
        let mut films = self.films.write().await;
        let before = films.len();
        films.retain(|f| f.film_id != film_id);
        let removed = films.len() != before;

        self.store.save(&films).await?;
        if removed {
            debug!(film_id, "Film removed from favorites");
        }
        Ok(removed)
    }

    /// Membership test by film id. No I/O.
    pub async fn contains(&self, film_id: i64) -> bool {
        self.films.read().await.iter().any(|f| f.film_id == film_id)
    }

    /// Empty the set and persist.
    pub async fn clear(&self) -> Result<(), FavoritesError> {
        let mut films = self.films.write().await;
        films.clear();
        self.store.save(&films).await?;
        debug!("Favorites cleared");
        Ok(())
    }

    /// Snapshot of the current favorites in insertion order.
    pub async fn list(&self) -> Vec<Film> {
        self.films.read().await.clone()
    }

    /// Snapshot of the favorited film ids.
    pub async fn ids(&self) -> HashSet<i64> {
        self.films.read().await.iter().map(|f| f.film_id).collect()
    }

    pub async fn len(&self) -> usize {
        self.films.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.films.read().await.is_empty()
    }
}
