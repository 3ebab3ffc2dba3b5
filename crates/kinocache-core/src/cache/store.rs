use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to decode {dataset} cache: {detail}")]
    Decode {
        dataset: &'static str,
        detail: String,
    },

    #[error("Failed to write {dataset} cache: {detail}")]
    Write {
        dataset: &'static str,
        detail: String,
    },
}

/// Durable store for one dataset, backed by a single JSON document.
///
/// `load` reports an absent or empty document as `Ok(None)`, not as an
/// error; callers fall through to a remote fetch in both cases but a
/// `Decode` failure is logged distinctly. Writes replace the whole
/// document. A per-store mutex serializes file access so concurrent saves
/// never interleave partial writes.
pub struct CacheStore<T> {
    path: PathBuf,
    dataset: &'static str,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> CacheStore<T> {
    /// Create a store for `dataset` under `cache_dir`, creating the
    /// directory if needed. The backing file is `<dataset>.json`.
    pub fn new(cache_dir: &Path, dataset: &'static str) -> Result<Self, CacheError> {
        std::fs::create_dir_all(cache_dir).map_err(|e| CacheError::Write {
            dataset,
            detail: e.to_string(),
        })?;

        Ok(Self {
            path: cache_dir.join(format!("{}.json", dataset)),
            dataset,
            lock: Mutex::new(()),
            _marker: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<T>, CacheError> {
        let _guard = self.lock.lock().await;

        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dataset = self.dataset, "No cache document on disk");
                return Ok(None);
            }
            Err(e) => {
                return Err(CacheError::Decode {
                    dataset: self.dataset,
                    detail: e.to_string(),
                })
            }
        };

        if contents.trim().is_empty() {
            debug!(dataset = self.dataset, "Cache document is empty");
            return Ok(None);
        }

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| CacheError::Decode {
                dataset: self.dataset,
                detail: e.to_string(),
            })
    }

    /// Replace the dataset's document with `data`.
    pub async fn save(&self, data: &T) -> Result<(), CacheError> {
        let contents = serde_json::to_string_pretty(data).map_err(|e| CacheError::Write {
            dataset: self.dataset,
            detail: e.to_string(),
        })?;

        let _guard = self.lock.lock().await;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| CacheError::Write {
                dataset: self.dataset,
                detail: e.to_string(),
            })
    }

    /// Remove the dataset's document. Absence is not an error.
    pub async fn clear(&self) -> Result<(), CacheError> {
        let _guard = self.lock.lock().await;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::Write {
                dataset: self.dataset,
                detail: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Film;
    use crate::testing::film;

    #[tokio::test]
    async fn test_load_returns_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();

        let films = vec![film(1, "Один"), film(2, "Два")];
        store.save(&films).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, films);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();

        store.save(&vec![film(1, "Один")]).await.unwrap();
        store.save(&vec![film(2, "Два")]).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].film_id, 2);
    }

    #[tokio::test]
    async fn test_empty_document_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();

        std::fs::write(store.path(), "   \n  ").unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let store: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();

        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(
            store.load().await,
            Err(CacheError::Decode { dataset: "films", .. })
        ));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();

        // Clearing an absent document succeeds
        store.clear().await.unwrap();

        store.save(&vec![film(1, "Один")]).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_datasets_do_not_interfere() {
        let dir = tempfile::tempdir().unwrap();
        let films: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "films").unwrap();
        let favorites: CacheStore<Vec<Film>> = CacheStore::new(dir.path(), "favorites").unwrap();

        films.save(&vec![film(1, "Один")]).await.unwrap();
        favorites.save(&vec![film(9, "Девять")]).await.unwrap();

        films.clear().await.unwrap();
        let loaded = favorites.load().await.unwrap().unwrap();
        assert_eq!(loaded[0].film_id, 9);
    }
}
