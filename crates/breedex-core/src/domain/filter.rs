//! Breed filtering and filter-option aggregation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::breed::BreedRecord;
use super::lifespan::average_lifespan;

/// Client-side filter applied to cached breeds.
///
/// Every populated criterion must match. String comparisons are
/// case-insensitive; blank strings are treated as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedFilter {
    /// Substring of the breed name.
    pub name: Option<String>,
    /// Exact origin.
    pub origin: Option<String>,
    /// One temperament trait the breed must list.
    pub temperament: Option<String>,
    /// Only favorites.
    pub favorites_only: bool,
}

impl BreedFilter {
    /// Filter that only keeps favorites.
    #[must_use]
    pub fn favorites() -> Self {
        Self {
            favorites_only: true,
            ..Self::default()
        }
    }

    /// Whether `breed` passes every populated criterion.
    pub fn matches(&self, breed: &BreedRecord) -> bool {
        if self.favorites_only && !breed.is_favorite {
            return false;
        }

        if let Some(name) = non_blank(self.name.as_deref()) {
            if !breed.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(origin) = non_blank(self.origin.as_deref()) {
            if breed.origin.trim().to_lowercase() != origin.to_lowercase() {
                return false;
            }
        }

        if let Some(temperament) = non_blank(self.temperament.as_deref()) {
            if !breed.has_trait(temperament) {
                return false;
            }
        }

        true
    }

    /// Whether no criterion is populated.
    pub fn is_empty(&self) -> bool {
        !self.favorites_only
            && non_blank(self.name.as_deref()).is_none()
            && non_blank(self.origin.as_deref()).is_none()
            && non_blank(self.temperament.as_deref()).is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Aggregate data about the cached breeds of one species, for building
/// filter controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedFilterOptions {
    /// Distinct non-empty origins, sorted.
    pub origins: Vec<String>,
    /// Distinct temperament traits, sorted.
    pub temperaments: Vec<String>,
    /// Number of cached breeds.
    pub breed_count: usize,
    /// Average lifespan across all cached breeds.
    pub average_lifespan: f64,
}

impl BreedFilterOptions {
    /// Aggregate filter options from a set of records.
    pub fn from_records(records: &[BreedRecord]) -> Self {
        let origins: BTreeSet<String> = records
            .iter()
            .map(|r| r.origin.trim())
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        let temperaments: BTreeSet<String> = records
            .iter()
            .flat_map(BreedRecord::traits)
            .map(String::from)
            .collect();

        Self {
            origins: origins.into_iter().collect(),
            temperaments: temperaments.into_iter().collect(),
            breed_count: records.len(),
            average_lifespan: average_lifespan(records),
        }
    }
}
