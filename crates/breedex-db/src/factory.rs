//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use breedex_core::ports::BreedSources;
use breedex_core::{AppCore, Repos};

use crate::repositories::{SqliteBreedRepository, SqliteSettingsRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `breedex-core` containing trait-object-wrapped
    /// repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteBreedRepository::new(pool.clone())),
            Arc::new(SqliteSettingsRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool and the remote sources.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, sources);
    /// ```
    pub fn build_app_core(pool: SqlitePool, sources: BreedSources) -> AppCore {
        AppCore::new(Self::build_repos(pool), sources)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
/// Repositories are built once, so every handle shares one change channel.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    repos: Repos,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self {
            repos: CoreFactory::build_repos(pool),
        })
    }

    /// The breed repository shared with [`repos`](Self::repos).
    ///
    /// Writes through it reach feeds watching an `AppCore` built from
    /// `repos()`.
    pub fn breed_repository(&self) -> Arc<dyn breedex_core::BreedRepository> {
        Arc::clone(&self.repos.breeds)
    }

    /// `Repos` backed by this test database.
    pub fn repos(&self) -> Repos {
        self.repos.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breedex_core::{BreedRecord, BreedRepository, Species};

    #[tokio::test]
    async fn test_breed_repository_shares_change_channel_with_repos() {
        let db = TestDb::new().await.unwrap();
        let mut changes = db.repos().breeds.changes();

        db.breed_repository()
            .replace_species(Species::Dog, &[BreedRecord::new(Species::Dog, "1", "Akita")])
            .await
            .unwrap();

        assert_eq!(changes.try_recv().unwrap().species, Species::Dog);
        let cached = db.repos().breeds.list(Species::Dog, false).await.unwrap();
        assert_eq!(cached.len(), 1);
    }
}
