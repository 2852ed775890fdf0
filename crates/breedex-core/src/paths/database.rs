//! Database path resolution.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// File name of the `SQLite` cache database.
pub const DATABASE_FILE_NAME: &str = "breedex.db";

/// Get the path to the breedex database file.
///
/// The `data/` subdirectory of the data root is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path under an explicit data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
