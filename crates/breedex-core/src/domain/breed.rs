//! Breed domain types.
//!
//! These types represent breeds in the system, independent of any
//! infrastructure concerns (database, HTTP API, etc.).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Species
// ─────────────────────────────────────────────────────────────────────────────

/// The species partition applied to all breed data and queries.
///
/// Cached records, remote sources and queries are always scoped to exactly
/// one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    /// Both species, in display order.
    pub const ALL: [Self; 2] = [Self::Cat, Self::Dog];

    /// Stable lowercase tag used for storage and parsing.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown species tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown species '{0}' (expected 'cat' or 'dog')")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" | "cats" => Ok(Self::Cat),
            "dog" | "dogs" => Ok(Self::Dog),
            other => Err(ParseSpeciesError(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Breed Record
// ─────────────────────────────────────────────────────────────────────────────

/// One breed, scoped to a species.
///
/// The remote-origin fields are written only by the refresh routine.
/// `is_favorite` is locally owned and written only by the favorite toggle;
/// the remote source never supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedRecord {
    /// Breed identifier, unique within its species.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Country or region of origin (free text, may be empty).
    pub origin: String,
    /// Comma-separated trait list (e.g. "Active, Energetic, Playful").
    pub temperament: String,
    /// Free-text description.
    pub description: String,
    /// Free-text lifespan (e.g. "10 - 14" or "12 years").
    pub life_span: String,
    /// Primary image URL, if the source provided one.
    pub image_url: Option<String>,
    /// Additional gallery image URLs discovered for this breed.
    #[serde(default)]
    pub additional_images: Vec<String>,
    /// Locally-owned favorite flag.
    #[serde(default)]
    pub is_favorite: bool,
    /// Species partition this record belongs to.
    pub species: Species,
}

impl BreedRecord {
    /// Create a record with only an id and name; all text fields empty.
    #[must_use]
    pub fn new(species: Species, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: String::new(),
            temperament: String::new(),
            description: String::new(),
            life_span: String::new(),
            image_url: None,
            additional_images: Vec::new(),
            is_favorite: false,
            species,
        }
    }

    /// Temperament split into trimmed, non-empty traits.
    pub fn traits(&self) -> impl Iterator<Item = &str> {
        self.temperament
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Whether the temperament lists `name` (case-insensitive).
    pub fn has_trait(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.traits().any(|t| t.to_lowercase() == wanted)
    }
}

/// One image returned by an image search for a breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedImage {
    /// Remote image identifier.
    pub id: String,
    /// Fully-qualified image URL.
    pub url: String,
}
