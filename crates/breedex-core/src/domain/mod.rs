//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `breed` - Breed types (`BreedRecord`, `BreedImage`, `Species`)
//! - `filter` - Client-side filtering and filter-option aggregation
//! - `lifespan` - Free-text lifespan parsing and averaging
//! - `refresh` - Pure cache reconciliation rules used by refresh

mod breed;
pub mod filter;
pub mod lifespan;
pub mod refresh;

// Re-export breed types at the domain level for convenience
pub use breed::{BreedImage, BreedRecord, ParseSpeciesError, Species};

pub use filter::{BreedFilter, BreedFilterOptions};
pub use lifespan::{average_lifespan, parse_lifespan};
pub use refresh::RefreshMode;
