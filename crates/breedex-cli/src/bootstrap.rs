//! CLI bootstrap - the composition root.
//!
//! This is the only place where infrastructure is wired together for the
//! CLI adapter:
//! - the `SQLite` pool and repositories (via breedex-db)
//! - one breed API client per species (via breedex-api)
//! - the core services (via breedex-core)
//!
//! Command handlers receive the composed `AppCore` and delegate work to it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use breedex_api::{BreedApiConfig, DefaultBreedApiClient};
use breedex_core::{AppCore, BreedSource, BreedSources, CoreError, Species, database_path};
use breedex_db::{CoreFactory, setup_database};
use tracing::debug;

use crate::error::CliError;

/// Environment variable holding TheCatAPI key.
pub const CAT_API_KEY_ENV: &str = "BREEDEX_CAT_API_KEY";
/// Environment variable holding TheDogAPI key.
pub const DOG_API_KEY_ENV: &str = "BREEDEX_DOG_API_KEY";
/// Environment variable overriding the HTTP timeout, in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "BREEDEX_HTTP_TIMEOUT_SECS";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// API key for the cat source.
    pub cat_api_key: Option<String>,
    /// API key for the dog source.
    pub dog_api_key: Option<String>,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            cat_api_key: None,
            dog_api_key: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout = match get(HTTP_TIMEOUT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    CliError::Config(format!(
                        "{HTTP_TIMEOUT_ENV} must be a positive number of seconds, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            cat_api_key: get(CAT_API_KEY_ENV),
            dog_api_key: get(DOG_API_KEY_ENV),
            http_timeout,
        })
    }

    fn api_key(&self, species: Species) -> Option<String> {
        match species {
            Species::Cat => self.cat_api_key.clone(),
            Species::Dog => self.dog_api_key.clone(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Wrap an already composed `AppCore`.
    pub const fn new(app: AppCore) -> Self {
        Self { app }
    }

    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Species to use when a command may or may not name one.
    ///
    /// Falls back to the configured default species, then to cats.
    pub async fn resolve_species(&self, explicit: Option<Species>) -> Result<Species, CoreError> {
        if let Some(species) = explicit {
            return Ok(species);
        }
        Ok(self.app.settings().get().await?.effective_species())
    }

    /// Configured page size for remote fetches.
    pub async fn page_size(&self) -> Result<u32, CoreError> {
        Ok(self.app.settings().get().await?.effective_page_size())
    }
}

/// Build the cat and dog API clients.
pub fn build_sources(config: &CliConfig) -> Result<BreedSources, CliError> {
    let client = |species: Species| -> Result<Arc<dyn BreedSource>, CliError> {
        let api_config = BreedApiConfig::new(species)
            .with_optional_api_key(config.api_key(species))
            .with_timeout(config.http_timeout);
        let client = DefaultBreedApiClient::new(&api_config)
            .map_err(|e| CliError::Config(format!("{species} API client: {e}")))?;
        if config.api_key(species).is_none() {
            debug!(species = %species, "No API key configured, using anonymous access");
        }
        Ok(Arc::new(client))
    };

    Ok(BreedSources::new(client(Species::Cat)?, client(Species::Dog)?))
}

/// Bootstrap the CLI application.
///
/// Opens (and migrates) the cache database, builds the API clients and
/// assembles the `AppCore`.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let db_path = database_path()?;
    let pool = setup_database(&db_path).await?;
    let sources = build_sources(&config)?;

    debug!(database = %db_path.display(), "CLI context ready");
    Ok(CliContext::new(CoreFactory::build_app_core(pool, sources)))
}
