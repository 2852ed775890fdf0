//! Settings repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::settings::Settings;

/// Repository for user preferences.
///
/// Settings are stored and loaded as a whole; the implementation handles
/// serialization.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load settings, or defaults if none are stored.
    async fn load(&self) -> Result<Settings, RepositoryError>;

    /// Save settings.
    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError>;
}
