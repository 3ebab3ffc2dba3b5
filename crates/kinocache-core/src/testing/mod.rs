//! Test support: mock catalog client and fixtures.

pub mod mock_catalog;

pub use mock_catalog::{MockCatalog, RecordedCall};

use crate::models::Film;

/// Minimal film fixture with a valid id and a Russian title.
pub fn film(film_id: i64, title: &str) -> Film {
    Film {
        film_id,
        name_ru: Some(title.to_string()),
        ..Default::default()
    }
}
