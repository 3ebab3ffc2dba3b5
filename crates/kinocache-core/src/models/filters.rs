//! Genre and country reference records and the filter taxonomy.

use serde::{Deserialize, Serialize};

/// Sentinel id for the synthetic "no filter selected" entry that the UI
/// prepends to taxonomy collections. Never persisted.
pub const ALL_SENTINEL_ID: i64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "genre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Genre {
    pub fn all() -> Self {
        Self {
            id: Some(ALL_SENTINEL_ID),
            name: Some("All genres".to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == Some(ALL_SENTINEL_ID)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "country", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Country {
    pub fn all() -> Self {
        Self {
            id: Some(ALL_SENTINEL_ID),
            name: Some("All countries".to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == Some(ALL_SENTINEL_ID)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

/// The full filter vocabulary served by the `/filters` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersTaxonomy {
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub countries: Vec<Country>,
}

impl FiltersTaxonomy {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_decodes_wire_names() {
        let json = r#"{
            "genres": [{"id": 1, "genre": "триллер"}, {"id": 2, "genre": "драма"}],
            "countries": [{"id": 1, "country": "США"}]
        }"#;
        let taxonomy: FiltersTaxonomy = serde_json::from_str(json).unwrap();
        assert_eq!(taxonomy.genres.len(), 2);
        assert_eq!(taxonomy.genres[0].name.as_deref(), Some("триллер"));
        assert_eq!(taxonomy.countries[0].name.as_deref(), Some("США"));
        assert!(!taxonomy.is_empty());
    }

    #[test]
    fn test_taxonomy_missing_sections_default_empty() {
        let taxonomy: FiltersTaxonomy = serde_json::from_str("{}").unwrap();
        assert!(taxonomy.is_empty());
    }

    #[test]
    fn test_sentinel_entries() {
        assert!(Genre::all().is_all());
        assert!(Country::all().is_all());
        let remote = Genre {
            id: Some(12),
            name: Some("ужасы".to_string()),
        };
        assert!(!remote.is_all());
        assert_eq!(remote.display_name(), "ужасы");
    }
}
