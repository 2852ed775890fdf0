//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` instance and use it to access all functionality.

use crate::ports::{BreedSources, Repos};

use super::{BreedService, SettingsService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete
/// repositories and remote sources.
///
/// # Example
///
/// ```ignore
/// let repos = breedex_db::factory::build_repos(&pool);
/// let sources = BreedSources::new(cat_client, dog_client);
/// let core = AppCore::new(repos, sources);
///
/// let favorites = core.breeds().list(Species::Cat, &BreedFilter::favorites()).await?;
/// ```
pub struct AppCore {
    breeds: BreedService,
    settings: SettingsService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and sources.
    pub fn new(repos: Repos, sources: BreedSources) -> Self {
        Self {
            breeds: BreedService::new(repos.breeds, sources),
            settings: SettingsService::new(repos.settings),
        }
    }

    /// Access the breed service.
    pub const fn breeds(&self) -> &BreedService {
        &self.breeds
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BreedFilter, Species};
    use crate::services::testing::{
        InMemoryBreedRepo, InMemorySettingsRepo, cat, cat_sources, idle_source,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_app_core_creation() {
        let repos = Repos::new(
            Arc::new(InMemoryBreedRepo::with_records(
                Species::Cat,
                vec![cat("a", true)],
            )),
            Arc::new(InMemorySettingsRepo::new()),
        );
        let core = AppCore::new(repos, cat_sources(idle_source(Species::Cat)));

        let breeds = core
            .breeds()
            .list(Species::Cat, &BreedFilter::default())
            .await
            .unwrap();
        assert_eq!(breeds.len(), 1);

        let settings = core.settings().get().await.unwrap();
        assert_eq!(settings.effective_species(), Species::Cat);
    }
}
