#![doc = include_str!("../README.md")]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    BreedFilter, BreedFilterOptions, BreedImage, BreedRecord, ParseSpeciesError, RefreshMode,
    Species, average_lifespan, parse_lifespan,
};
pub use ports::{
    BreedRepository, BreedSource, BreedSources, CacheChange, CoreError, Repos, RepositoryError,
    SettingsRepository, SourceError,
};
pub use services::{AppCore, BreedFeed, BreedService, RefreshOutcome, SettingsService};
pub use settings::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Settings, SettingsError, SettingsUpdate, Theme,
    validate_settings,
};

pub use paths::{PathError, ResolvedPaths, data_root, database_path};
