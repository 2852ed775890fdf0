//! Breed service - refresh, favorites, images and cache queries.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::BreedFeed;
use crate::domain::refresh::{normalize_query, reconcile};
use crate::domain::{
    BreedFilter, BreedFilterOptions, BreedRecord, RefreshMode, Species, average_lifespan,
};
use crate::ports::{BreedRepository, BreedSources, CoreError};

/// Number of gallery images requested per breed.
pub const IMAGE_FETCH_LIMIT: u32 = 5;

/// Result of a successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub species: Species,
    pub mode: RefreshMode,
    /// Records returned by the remote source.
    pub fetched: usize,
    /// Records handed to the cache after reconciliation.
    pub written: usize,
}

/// Service orchestrating the remote sources and the local breed cache.
pub struct BreedService {
    repo: Arc<dyn BreedRepository>,
    sources: BreedSources,
}

impl BreedService {
    /// Create a new breed service.
    pub fn new(repo: Arc<dyn BreedRepository>, sources: BreedSources) -> Self {
        Self { repo, sources }
    }

    /// Fetch breeds from the remote source and merge them into the cache.
    ///
    /// A non-blank `query` runs a search whose results replace the cached
    /// set. Without one, page 0 replaces and later pages append. Favorite
    /// flags survive in every mode. A fetch failure leaves the cache
    /// untouched.
    pub async fn refresh(
        &self,
        species: Species,
        page: u32,
        query: Option<&str>,
        limit: u32,
    ) -> Result<RefreshOutcome, CoreError> {
        let source = self.sources.for_species(species);
        let mode = RefreshMode::resolve(page, query);

        let mut incoming = match normalize_query(query) {
            Some(q) => {
                debug!(species = %species, query = %q, "Searching breeds");
                source.search_breeds(q).await?
            }
            None => {
                debug!(species = %species, page, limit, "Fetching breed page");
                source.fetch_breeds(limit, page).await?
            }
        };
        let fetched = incoming.len();

        // Records land under the requested species
        for record in &mut incoming {
            record.species = species;
        }

        let existing = self.repo.list(species, false).await?;
        let batch = reconcile(mode, &existing, incoming);

        match mode {
            RefreshMode::Replace => self.repo.replace_species(species, &batch).await?,
            RefreshMode::Append => self.repo.append_species(species, &batch).await?,
        }

        info!(
            species = %species,
            page,
            ?mode,
            fetched,
            written = batch.len(),
            "Refreshed breed cache"
        );

        Ok(RefreshOutcome {
            species,
            mode,
            fetched,
            written: batch.len(),
        })
    }

    /// Flip the favorite flag of a cached breed.
    ///
    /// Returns the new flag, or `None` when the breed isn't cached.
    pub async fn toggle_favorite(
        &self,
        species: Species,
        id: &str,
    ) -> Result<Option<bool>, CoreError> {
        let toggled = self.repo.toggle_favorite(species, id).await?;
        match toggled {
            Some(state) => info!(species = %species, id, favorite = state, "Toggled favorite"),
            None => debug!(species = %species, id, "Toggle ignored for unknown breed"),
        }
        Ok(toggled)
    }

    /// Gallery image URLs for a breed.
    ///
    /// Cached images are returned without a remote call. Otherwise images are
    /// fetched and stored on the cached record. Any failure degrades to the
    /// cached images, or an empty list.
    pub async fn breed_images(&self, species: Species, id: &str) -> Vec<String> {
        let cached = match self.repo.get(species, id).await {
            Ok(record) => record,
            Err(e) => {
                warn!(species = %species, id, error = %e, "Failed to read cached breed");
                None
            }
        };

        if let Some(record) = &cached {
            if !record.additional_images.is_empty() {
                return record.additional_images.clone();
            }
        }

        let source = self.sources.for_species(species);
        match source.fetch_images(id, IMAGE_FETCH_LIMIT).await {
            Ok(images) => {
                let urls: Vec<String> = images.into_iter().map(|image| image.url).collect();
                if cached.is_some() {
                    if let Err(e) = self.repo.set_additional_images(species, id, &urls).await {
                        warn!(species = %species, id, error = %e, "Failed to store breed images");
                    }
                }
                debug!(species = %species, id, count = urls.len(), "Fetched breed images");
                urls
            }
            Err(e) => {
                warn!(species = %species, id, error = %e, "Image fetch failed, using cache");
                cached.map(|r| r.additional_images).unwrap_or_default()
            }
        }
    }

    /// List cached breeds passing `filter`.
    pub async fn list(
        &self,
        species: Species,
        filter: &BreedFilter,
    ) -> Result<Vec<BreedRecord>, CoreError> {
        let records = self.repo.list(species, filter.favorites_only).await?;
        Ok(records.into_iter().filter(|r| filter.matches(r)).collect())
    }

    /// Get one cached breed.
    pub async fn get(&self, species: Species, id: &str) -> Result<Option<BreedRecord>, CoreError> {
        self.repo.get(species, id).await.map_err(CoreError::from)
    }

    /// Find a cached breed. Returns error if not found.
    pub async fn find(&self, species: Species, id: &str) -> Result<BreedRecord, CoreError> {
        self.get(species, id)
            .await?
            .ok_or_else(|| CoreError::Validation(format!("Breed not found: {species}/{id}")))
    }

    /// Aggregate filter options over every cached breed of a species.
    pub async fn filter_options(&self, species: Species) -> Result<BreedFilterOptions, CoreError> {
        let records = self.repo.list(species, false).await?;
        Ok(BreedFilterOptions::from_records(&records))
    }

    /// Average lifespan of the cached breeds passing `filter`.
    pub async fn average_lifespan(
        &self,
        species: Species,
        filter: &BreedFilter,
    ) -> Result<f64, CoreError> {
        let records = self.list(species, filter).await?;
        Ok(average_lifespan(&records))
    }

    /// Observe the cached breeds of a species.
    pub fn watch(&self, species: Species, favorites_only: bool) -> BreedFeed {
        BreedFeed::new(&self.repo, species, favorites_only)
    }
}
