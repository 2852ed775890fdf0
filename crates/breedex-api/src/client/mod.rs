//! Breed API client.

mod breeds;

use url::Url;

use crate::config::BreedApiConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default breed API client using the reqwest HTTP backend.
pub type DefaultBreedApiClient = BreedApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for one species' breed API.
///
/// Generic over an HTTP backend so tests can inject canned responses. Use
/// `DefaultBreedApiClient` in production code.
pub struct BreedApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultBreedApiClient {
    pub(crate) fn try_new(config: &BreedApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(
            config.api_key.as_deref(),
            &config.user_agent,
            config.timeout,
        )?;

        Ok(Self {
            backend,
            config: ApiConfig::new(config.species, base_url),
        })
    }
}

impl<B: HttpBackend> BreedApiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
