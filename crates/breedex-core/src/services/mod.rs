//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod breed_feed;
mod breed_service;
mod settings_service;

#[cfg(test)]
pub(crate) mod testing;

pub use app_core::AppCore;
pub use breed_feed::BreedFeed;
pub use breed_service::{BreedService, IMAGE_FETCH_LIMIT, RefreshOutcome};
pub use settings_service::SettingsService;
