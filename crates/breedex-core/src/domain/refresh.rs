//! Pure reconciliation rules for refreshing the breed cache.
//!
//! The refresh service fetches remote data and then uses these helpers to
//! decide how it lands in the cache. Nothing here performs I/O.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::breed::BreedRecord;

/// How a freshly fetched batch is written to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    /// The batch becomes the species' entire cached set.
    Replace,
    /// The batch is added to the cached set, skipping known ids.
    Append,
}

impl RefreshMode {
    /// Resolve the write mode for a page request.
    ///
    /// A non-blank search query always replaces, whatever the page.
    /// Otherwise page 0 replaces and later pages append.
    pub fn resolve(page: u32, query: Option<&str>) -> Self {
        if normalize_query(query).is_some() || page == 0 {
            Self::Replace
        } else {
            Self::Append
        }
    }
}

/// Trim a search query, mapping blank input to `None`.
pub fn normalize_query(query: Option<&str>) -> Option<&str> {
    query.map(str::trim).filter(|q| !q.is_empty())
}

/// Carry the favorite flag from cached records onto an incoming batch.
///
/// Matching is by id. Incoming records with no cached counterpart are
/// marked not-favorite, whatever the source sent.
pub fn carry_favorites(existing: &[BreedRecord], incoming: Vec<BreedRecord>) -> Vec<BreedRecord> {
    let favorites: HashMap<&str, bool> = existing
        .iter()
        .map(|r| (r.id.as_str(), r.is_favorite))
        .collect();

    incoming
        .into_iter()
        .map(|mut record| {
            record.is_favorite = favorites.get(record.id.as_str()).copied().unwrap_or(false);
            record
        })
        .collect()
}

/// Drop records whose id repeats an earlier record in the batch.
pub fn dedup_by_id(records: Vec<BreedRecord>) -> Vec<BreedRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}

/// Keep only records whose id is not already cached.
pub fn only_new(existing: &[BreedRecord], incoming: Vec<BreedRecord>) -> Vec<BreedRecord> {
    let known: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();
    incoming
        .into_iter()
        .filter(|r| !known.contains(r.id.as_str()))
        .collect()
}

/// Build the batch to write for a refresh.
///
/// Favorites are carried forward in both modes. In append mode, ids that
/// are already cached are skipped.
pub fn reconcile(
    mode: RefreshMode,
    existing: &[BreedRecord],
    incoming: Vec<BreedRecord>,
) -> Vec<BreedRecord> {
    let incoming = dedup_by_id(incoming);
    let incoming = match mode {
        RefreshMode::Replace => incoming,
        RefreshMode::Append => only_new(existing, incoming),
    };
    carry_favorites(existing, incoming)
}
