//! User-curated favorites set, persisted as a single JSON document.

pub mod store;

pub use store::{FavoritesError, FavoritesStore};
