//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and storage-focused
//! - Remote sources are scoped to one species each

pub mod breed_repository;
pub mod breed_source;
pub mod settings_repository;

use std::sync::Arc;
use thiserror::Error;

pub use breed_repository::{BreedRepository, CacheChange};
pub use breed_source::{BreedSource, BreedSources, SourceError};
pub use settings_repository::SettingsRepository;

#[cfg(test)]
pub use breed_source::MockBreedSource;

/// Container for all repository trait objects.
///
/// Lives in `breedex-core` so that `AppCore` can accept it without
/// depending on `breedex-db`.
///
/// # Example
///
/// ```ignore
/// // In breedex-db:
/// pub fn build_repos(pool: SqlitePool) -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, sources);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Breed cache.
    pub breeds: Arc<dyn BreedRepository>,
    /// User preferences.
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(breeds: Arc<dyn BreedRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { breeds, settings }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Every service returns this. Adapters map it to their own error types
/// (CLI exit codes, for instance).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Remote source failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
