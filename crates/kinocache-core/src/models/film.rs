//! Film metadata record.
//!
//! Mirrors the Kinopoisk API film shape. Every remote field is optional
//! except `filmId`; unknown fields are ignored so additive API changes do
//! not break decoding. `year` and `filmLength` arrive as either a JSON
//! number or a string depending on the endpoint, so both fields go through
//! a lenient deserializer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::filters::{Country, Genre};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(rename = "filmId", default)]
    pub film_id: i64,

    #[serde(rename = "kinopoiskId", default, skip_serializing_if = "Option::is_none")]
    pub kinopoisk_id: Option<i64>,
    #[serde(rename = "kinopoiskHDId", default, skip_serializing_if = "Option::is_none")]
    pub kinopoisk_hd_id: Option<String>,
    #[serde(rename = "imdbId", default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    #[serde(rename = "nameRu", default, skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(rename = "nameEn", default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(rename = "nameOriginal", default, skip_serializing_if = "Option::is_none")]
    pub name_original: Option<String>,

    #[serde(rename = "posterUrl", default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(rename = "posterUrlPreview", default, skip_serializing_if = "Option::is_none")]
    pub poster_url_preview: Option<String>,
    #[serde(rename = "coverUrl", default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(rename = "logoUrl", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    // Number on some endpoints, string on others
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        rename = "filmLength",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub film_length: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "shortDescription", default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "editorAnnotation", default, skip_serializing_if = "Option::is_none")]
    pub editor_annotation: Option<String>,

    #[serde(rename = "ratingKinopoisk", default, skip_serializing_if = "Option::is_none")]
    pub rating_kinopoisk: Option<f64>,
    #[serde(rename = "ratingKinopoiskVoteCount", default, skip_serializing_if = "Option::is_none")]
    pub rating_kinopoisk_vote_count: Option<i64>,
    #[serde(rename = "ratingImdb", default, skip_serializing_if = "Option::is_none")]
    pub rating_imdb: Option<f64>,
    #[serde(rename = "ratingImdbVoteCount", default, skip_serializing_if = "Option::is_none")]
    pub rating_imdb_vote_count: Option<i64>,
    #[serde(rename = "ratingFilmCritics", default, skip_serializing_if = "Option::is_none")]
    pub rating_film_critics: Option<f64>,
    #[serde(rename = "ratingFilmCriticsVoteCount", default, skip_serializing_if = "Option::is_none")]
    pub rating_film_critics_vote_count: Option<i64>,
    #[serde(rename = "ratingAwait", default, skip_serializing_if = "Option::is_none")]
    pub rating_await: Option<f64>,
    #[serde(rename = "ratingAwaitCount", default, skip_serializing_if = "Option::is_none")]
    pub rating_await_count: Option<i64>,
    #[serde(rename = "ratingRfCritics", default, skip_serializing_if = "Option::is_none")]
    pub rating_rf_critics: Option<f64>,
    #[serde(rename = "ratingRfCriticsVoteCount", default, skip_serializing_if = "Option::is_none")]
    pub rating_rf_critics_vote_count: Option<i64>,
    #[serde(rename = "ratingGoodReview", default, skip_serializing_if = "Option::is_none")]
    pub rating_good_review: Option<f64>,
    #[serde(rename = "ratingGoodReviewVoteCount", default, skip_serializing_if = "Option::is_none")]
    pub rating_good_review_vote_count: Option<i64>,
    #[serde(rename = "reviewsCount", default, skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<i64>,

    #[serde(rename = "webUrl", default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub film_type: Option<String>,
    #[serde(rename = "productionStatus", default, skip_serializing_if = "Option::is_none")]
    pub production_status: Option<String>,
    #[serde(rename = "ratingMpaa", default, skip_serializing_if = "Option::is_none")]
    pub rating_mpaa: Option<String>,
    #[serde(rename = "ratingAgeLimits", default, skip_serializing_if = "Option::is_none")]
    pub rating_age_limits: Option<String>,
    #[serde(rename = "isTicketsAvailable", default, skip_serializing_if = "Option::is_none")]
    pub is_tickets_available: Option<bool>,
    #[serde(rename = "hasImax", default, skip_serializing_if = "Option::is_none")]
    pub has_imax: Option<bool>,
    #[serde(rename = "has3D", default, skip_serializing_if = "Option::is_none")]
    pub has_3d: Option<bool>,

    #[serde(rename = "startYear", default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i64>,
    #[serde(rename = "endYear", default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<bool>,
    #[serde(rename = "shortFilm", default, skip_serializing_if = "Option::is_none")]
    pub short_film: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    #[serde(rename = "lastSync", default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<Country>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,

    /// Display state, recomputed from the favorites store whenever the film
    /// enters a displayed collection. Never trusted when read back from disk.
    #[serde(rename = "isFavorite", default, skip_serializing_if = "is_false")]
    pub is_favorite: bool,
}

impl Film {
    /// Best available display title.
    pub fn title(&self) -> &str {
        self.name_ru
            .as_deref()
            .or(self.name_en.as_deref())
            .or(self.name_original.as_deref())
            .unwrap_or("Untitled")
    }

    /// Original or English title when it differs from the display title.
    pub fn alternate_title(&self) -> Option<&str> {
        self.name_original
            .as_deref()
            .or(self.name_en.as_deref())
            .filter(|t| *t != self.title())
    }

    pub fn has_valid_id(&self) -> bool {
        self.film_id > 0
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Accept a string, an integer or a float where a string is expected.
/// The API encodes `year` and `filmLength` inconsistently across endpoints.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(f)) => Some(f.to_string()),
        Some(Raw::Text(s)) => Some(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_year_and_length_as_numbers() {
        let json = r#"{"filmId": 301, "nameRu": "Матрица", "year": 1999, "filmLength": 136}"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.film_id, 301);
        assert_eq!(film.year.as_deref(), Some("1999"));
        assert_eq!(film.film_length.as_deref(), Some("136"));
    }

    #[test]
    fn test_decode_year_and_length_as_strings() {
        let json = r#"{"filmId": 301, "year": "1999", "filmLength": "02:16"}"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.year.as_deref(), Some("1999"));
        assert_eq!(film.film_length.as_deref(), Some("02:16"));
    }

    #[test]
    fn test_decode_tolerates_unknown_and_null_fields() {
        let json = r#"{
            "filmId": 7,
            "nameRu": null,
            "ratingKinopoisk": 8.1,
            "someFutureField": {"nested": true}
        }"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.film_id, 7);
        assert_eq!(film.name_ru, None);
        assert_eq!(film.rating_kinopoisk, Some(8.1));
    }

    #[test]
    fn test_decode_genre_and_country_wire_names() {
        let json = r#"{
            "filmId": 42,
            "genres": [{"genre": "драма"}, {"id": 3, "genre": "комедия"}],
            "countries": [{"country": "США"}]
        }"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.genres.len(), 2);
        assert_eq!(film.genres[0].name.as_deref(), Some("драма"));
        assert_eq!(film.genres[1].id, Some(3));
        assert_eq!(film.countries[0].name.as_deref(), Some("США"));
    }

    #[test]
    fn test_absent_fields_omitted_on_write() {
        let film = Film {
            film_id: 1,
            name_ru: Some("Тест".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&film).unwrap();
        assert!(json.contains("\"filmId\":1"));
        assert!(json.contains("\"nameRu\""));
        assert!(!json.contains("posterUrl"));
        assert!(!json.contains("isFavorite"));
        assert!(!json.contains("genres"));
    }

    #[test]
    fn test_round_trip_preserves_favorite_flag() {
        let film = Film {
            film_id: 5,
            is_favorite: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&film).unwrap();
        let back: Film = serde_json::from_str(&json).unwrap();
        assert_eq!(back, film);
    }

    #[test]
    fn test_title_fallback_chain() {
        let mut film = Film::default();
        assert_eq!(film.title(), "Untitled");
        film.name_original = Some("The Matrix".to_string());
        assert_eq!(film.title(), "The Matrix");
        film.name_ru = Some("Матрица".to_string());
        assert_eq!(film.title(), "Матрица");
        assert_eq!(film.alternate_title(), Some("The Matrix"));
    }
}
