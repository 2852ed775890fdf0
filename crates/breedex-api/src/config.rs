//! Public configuration for the breed API client.

use std::time::Duration;

use breedex_core::Species;

/// Default base URL for cat breeds.
pub const CAT_API_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Default base URL for dog breeds.
pub const DOG_API_BASE_URL: &str = "https://api.thedogapi.com/v1";

/// Configuration for one species' breed API client.
///
/// # Example
///
/// ```
/// use breedex_api::BreedApiConfig;
/// use breedex_core::Species;
/// use std::time::Duration;
///
/// let config = BreedApiConfig::new(Species::Cat)
///     .with_api_key("live_abc")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct BreedApiConfig {
    pub(crate) species: Species,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl BreedApiConfig {
    /// Configuration with the default base URL for `species`.
    #[must_use]
    pub fn new(species: Species) -> Self {
        let base_url = match species {
            Species::Cat => CAT_API_BASE_URL,
            Species::Dog => DOG_API_BASE_URL,
        };
        Self {
            species,
            base_url: base_url.to_string(),
            api_key: None,
            user_agent: concat!("breedex/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key sent as `x-api-key`.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key. Blank keys are treated as absent.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Species this configuration serves.
    pub const fn species(&self) -> Species {
        self.species
    }
}
