//! Internal types: resolved client configuration and wire DTOs.
//!
//! Wire types mirror the JSON returned by the breed APIs and never leave
//! this crate.

use breedex_core::Species;
use serde::Deserialize;
use url::Url;

// ============================================================================
// Resolved Configuration
// ============================================================================

/// Client configuration after validation.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub species: Species,
    pub base_url: Url,
    pub cdn_base: &'static str,
}

impl ApiConfig {
    pub fn new(species: Species, base_url: Url) -> Self {
        Self {
            species,
            base_url,
            cdn_base: cdn_base_for(species),
        }
    }
}

/// Image CDN used to rebuild URLs from a `reference_image_id`.
pub const fn cdn_base_for(species: Species) -> &'static str {
    match species {
        Species::Cat => "https://cdn2.thecatapi.com/images",
        Species::Dog => "https://cdn2.thedogapi.com/images",
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Breed identifier as sent on the wire.
///
/// Cat ids are short strings ("abys"); dog ids are integers.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Image reference embedded in a breed.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireBreedImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// One breed from `/breeds` or `/breeds/search`.
///
/// Every text field is optional; the dog API omits `description` and often
/// `origin`.
#[derive(Debug, Clone, Deserialize)]
pub struct WireBreed {
    pub id: WireId,
    pub name: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bred_for: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub reference_image_id: Option<String>,
    #[serde(default)]
    pub image: Option<WireBreedImage>,
}

/// One result from `/images/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct WireImage {
    pub id: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_id_accepts_strings_and_numbers() {
        let text: WireId = serde_json::from_value(json!("abys")).unwrap();
        let number: WireId = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(text.into_string(), "abys");
        assert_eq!(number.into_string(), "12");
    }

    #[test]
    fn test_wire_breed_tolerates_missing_fields() {
        let breed: WireBreed =
            serde_json::from_value(json!({"id": 1, "name": "Affenpinscher"})).unwrap();
        assert!(breed.origin.is_none());
        assert!(breed.image.is_none());
    }

    #[test]
    fn test_wire_breed_tolerates_nulls() {
        let breed: WireBreed = serde_json::from_value(json!({
            "id": "abys",
            "name": "Abyssinian",
            "origin": null,
            "image": {"url": null}
        }))
        .unwrap();
        assert!(breed.origin.is_none());
        assert!(breed.image.unwrap().url.is_none());
    }
}
