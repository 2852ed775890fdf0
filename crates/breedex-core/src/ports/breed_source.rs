//! Remote breed source port.
//!
//! A `BreedSource` is one configured remote API scoped to a single species.
//! The HTTP implementation lives in `breedex-api`.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{BreedImage, BreedRecord, Species};

/// Errors a remote breed source can report.
///
/// Adapters map their transport errors into these variants at the port
/// boundary so services never see HTTP client types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Connection, DNS or timeout failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status not covered by a more specific variant.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The API key was missing or rejected.
    #[error("Unauthorized: check the API key for this species")]
    Unauthorized,

    /// The remote API throttled the request.
    #[error("Rate limited by the remote API")]
    RateLimited,

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The source was misconfigured (bad base URL, client build failure).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Port for fetching breed data from a remote API.
///
/// # Design
///
/// - One instance per species; `species()` reports which
/// - Pages are 0-based
/// - Returned records never carry a favorite flag
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Species this source serves.
    fn species(&self) -> Species;

    /// Fetch one page of breeds.
    async fn fetch_breeds(&self, limit: u32, page: u32) -> Result<Vec<BreedRecord>, SourceError>;

    /// Search breeds by free-text query.
    async fn search_breeds(&self, query: &str) -> Result<Vec<BreedRecord>, SourceError>;

    /// Fetch up to `limit` images for a breed.
    async fn fetch_images(
        &self,
        breed_id: &str,
        limit: u32,
    ) -> Result<Vec<BreedImage>, SourceError>;
}

/// The pair of configured sources, one per species.
#[derive(Clone)]
pub struct BreedSources {
    cat: Arc<dyn BreedSource>,
    dog: Arc<dyn BreedSource>,
}

impl BreedSources {
    /// Bundle a cat source and a dog source.
    pub fn new(cat: Arc<dyn BreedSource>, dog: Arc<dyn BreedSource>) -> Self {
        Self { cat, dog }
    }

    /// Select the source serving `species`.
    pub fn for_species(&self, species: Species) -> &Arc<dyn BreedSource> {
        match species {
            Species::Cat => &self.cat,
            Species::Dog => &self.dog,
        }
    }
}
