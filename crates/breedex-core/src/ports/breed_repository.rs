//! Breed cache repository trait definition.
//!
//! This port defines the interface for the local breed cache.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::RepositoryError;
use crate::domain::{BreedRecord, Species};

/// Notification that cached data for a species was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheChange {
    pub species: Species,
}

/// Repository for the local breed cache.
///
/// Records are keyed by `(species, id)` and listed in insertion order.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `replace_species` and `append_species` are atomic
/// - Every successful write sends a `CacheChange` to `changes()` subscribers
/// - Merge and filter logic belong in `BreedService`, not here
#[async_trait]
pub trait BreedRepository: Send + Sync {
    /// Replace the whole cached set for a species with `records`.
    async fn replace_species(
        &self,
        species: Species,
        records: &[BreedRecord],
    ) -> Result<(), RepositoryError>;

    /// Append `records` after the existing ones. Ids already cached are ignored.
    async fn append_species(
        &self,
        species: Species,
        records: &[BreedRecord],
    ) -> Result<(), RepositoryError>;

    /// List cached records for a species, optionally only favorites.
    async fn list(
        &self,
        species: Species,
        favorites_only: bool,
    ) -> Result<Vec<BreedRecord>, RepositoryError>;

    /// Get one cached record, or `None` if it isn't cached.
    async fn get(&self, species: Species, id: &str)
    -> Result<Option<BreedRecord>, RepositoryError>;

    /// Flip the favorite flag of a record.
    ///
    /// Returns the new flag, or `None` when no such record is cached.
    async fn toggle_favorite(
        &self,
        species: Species,
        id: &str,
    ) -> Result<Option<bool>, RepositoryError>;

    /// Store gallery images on a cached record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record isn't cached.
    async fn set_additional_images(
        &self,
        species: Species,
        id: &str,
        images: &[String],
    ) -> Result<(), RepositoryError>;

    /// Subscribe to cache write notifications.
    fn changes(&self) -> broadcast::Receiver<CacheChange>;
}
