//! Path utilities for breedex data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O; adapters decide how to report failures
//! - Environment lookups stay in `platform`; the rest is pure

mod database;
mod error;
mod platform;
mod resolver;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, data_root_from};
pub use resolver::ResolvedPaths;
