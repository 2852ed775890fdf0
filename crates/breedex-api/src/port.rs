//! `BreedSource` implementation for `BreedApiClient`.
//!
//! Converts internal errors into the core-owned `SourceError`.

use async_trait::async_trait;
use breedex_core::{BreedImage, BreedRecord, BreedSource, SourceError, Species};

use crate::client::{BreedApiClient, DefaultBreedApiClient};
use crate::config::BreedApiConfig;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `SourceError`.
fn map_error(err: ApiError) -> SourceError {
    match err {
        ApiError::RequestFailed { status, url } => match status {
            401 | 403 => SourceError::Unauthorized,
            429 => SourceError::RateLimited,
            _ => SourceError::Http {
                status,
                message: url,
            },
        },
        ApiError::InvalidResponse { message } => SourceError::InvalidResponse(message),
        ApiError::ClientConfig(message) => SourceError::Configuration(message),
        ApiError::Network(e) => SourceError::Network(e.to_string()),
        ApiError::InvalidUrl(e) => SourceError::Configuration(e.to_string()),
        ApiError::JsonParse(e) => SourceError::InvalidResponse(e.to_string()),
    }
}

// ============================================================================
// Public Construction
// ============================================================================

impl DefaultBreedApiClient {
    /// Create a client from configuration.
    ///
    /// Fails with `SourceError::Configuration` for an unparseable base URL or
    /// an API key that isn't a valid header value.
    pub fn new(config: &BreedApiConfig) -> Result<Self, SourceError> {
        Self::try_new(config).map_err(map_error)
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> BreedSource for BreedApiClient<B> {
    fn species(&self) -> Species {
        self.config.species
    }

    async fn fetch_breeds(&self, limit: u32, page: u32) -> Result<Vec<BreedRecord>, SourceError> {
        self.list_breeds(limit, page).await.map_err(map_error)
    }

    async fn search_breeds(&self, query: &str) -> Result<Vec<BreedRecord>, SourceError> {
        self.search(query).await.map_err(map_error)
    }

    async fn fetch_images(
        &self,
        breed_id: &str,
        limit: u32,
    ) -> Result<Vec<BreedImage>, SourceError> {
        self.images(breed_id, limit).await.map_err(map_error)
    }
}
