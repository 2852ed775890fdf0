//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::Species;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Preferred color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SettingsError::UnknownTheme(other.to_string())),
        }
    }
}

/// User preferences.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Preferred color theme.
    pub theme: Option<Theme>,

    /// Species used when a command doesn't name one.
    pub default_species: Option<Species>,

    /// Number of breeds requested per page (1-100).
    pub page_size: Option<u32>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            theme: Some(Theme::System),
            default_species: Some(Species::Cat),
            page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }

    /// Get the effective page size (with default fallback).
    #[must_use]
    pub const fn effective_page_size(&self) -> u32 {
        match self.page_size {
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        }
    }

    /// Get the effective default species (with default fallback).
    #[must_use]
    pub const fn effective_species(&self) -> Species {
        match self.default_species {
            Some(species) => species,
            None => Species::Cat,
        }
    }

    /// Merge an update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(theme) = other.theme {
            self.theme = theme;
        }
        if let Some(species) = other.default_species {
            self.default_species = species;
        }
        if let Some(size) = other.page_size {
            self.page_size = size;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset field to unset
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub theme: Option<Option<Theme>>,
    pub default_species: Option<Option<Species>>,
    pub page_size: Option<Option<u32>>,
}

impl SettingsUpdate {
    /// Whether the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.theme.is_none() && self.default_species.is_none() && self.page_size.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Page size must be between 1 and {MAX_PAGE_SIZE}, got {0}")]
    InvalidPageSize(u32),

    #[error("Unknown theme '{0}' (expected system, light or dark)")]
    UnknownTheme(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(size) = settings.page_size {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(SettingsError::InvalidPageSize(size));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.theme, Some(Theme::System));
        assert_eq!(settings.default_species, Some(Species::Cat));
        assert_eq!(settings.page_size, Some(DEFAULT_PAGE_SIZE));
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_effective_fallbacks() {
        let settings = Settings::default();
        assert_eq!(settings.effective_page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(settings.effective_species(), Species::Cat);
    }

    #[test]
    fn test_validate_page_size_bounds() {
        for bad in [0, MAX_PAGE_SIZE + 1] {
            let settings = Settings {
                page_size: Some(bad),
                ..Default::default()
            };
            assert!(matches!(
                validate_settings(&settings),
                Err(SettingsError::InvalidPageSize(n)) if n == bad
            ));
        }

        let settings = Settings {
            page_size: Some(MAX_PAGE_SIZE),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_merge_settings() {
        let mut settings = Settings::with_defaults();
        let update = SettingsUpdate {
            default_species: Some(Some(Species::Dog)),
            theme: Some(None), // Clear theme
            ..Default::default()
        };
        settings.merge(&update);

        assert_eq!(settings.default_species, Some(Species::Dog));
        assert_eq!(settings.theme, None);
        assert_eq!(settings.page_size, Some(DEFAULT_PAGE_SIZE)); // Unchanged
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(SettingsError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_settings_json_tolerates_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, Some(Theme::Dark));
        assert_eq!(settings.page_size, None);
    }
}
