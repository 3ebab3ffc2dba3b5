//! Persisted per-dataset JSON cache.
//!
//! Each dataset (films, filters, favorites) is one whole JSON document on
//! disk. A document is either present and valid, or it is a miss; there is
//! no TTL and no partial update.

pub mod store;

pub use store::{CacheError, CacheStore};
