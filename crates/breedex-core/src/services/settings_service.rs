//! Settings service - orchestrates settings operations.

use crate::ports::{CoreError, SettingsRepository};
use crate::settings::{Settings, SettingsUpdate, validate_settings};
use std::sync::Arc;
use tracing::info;

/// Service for settings operations.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Get current settings.
    pub async fn get(&self) -> Result<Settings, CoreError> {
        self.repo.load().await.map_err(CoreError::from)
    }

    /// Update settings with partial changes.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let mut current = self.repo.load().await.map_err(CoreError::from)?;
        current.merge(&update);
        validate_settings(&current)?;
        self.repo.save(&current).await.map_err(CoreError::from)?;
        info!(?update, "Settings updated");
        Ok(current)
    }

    /// Save complete settings (validates first).
    pub async fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        validate_settings(settings)?;
        self.repo.save(settings).await.map_err(CoreError::from)
    }
}
