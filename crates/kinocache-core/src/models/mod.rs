//! Data models for the Kinopoisk catalog.
//!
//! - `Film`: full film metadata record as returned by the API
//! - `Genre`, `Country`: reference records used for filtering
//! - `FiltersTaxonomy`: the complete filter vocabulary

pub mod film;
pub mod filters;

pub use film::Film;
pub use filters::{Country, FiltersTaxonomy, Genre};
