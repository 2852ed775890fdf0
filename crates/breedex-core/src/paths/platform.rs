//! Data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "BREEDEX_DATA_DIR";

const APP_DIR_NAME: &str = "breedex";

/// Get the root directory for application data (database, settings).
///
/// Resolution order:
/// 1. `BREEDEX_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/breedex`)
///
/// The directory is created if missing.
pub fn data_root() -> Result<PathBuf, PathError> {
    let override_dir = env::var(DATA_DIR_ENV).ok();
    let system_dir = dirs::data_local_dir();
    data_root_from(override_dir.as_deref(), system_dir.as_deref())
}

/// Resolve the data root from explicit inputs.
///
/// A blank override is ignored.
pub fn data_root_from(
    override_dir: Option<&str>,
    system_dir: Option<&Path>,
) -> Result<PathBuf, PathError> {
    let root = match override_dir.map(str::trim).filter(|d| !d.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => system_dir.ok_or(PathError::NoDataDir)?.join(APP_DIR_NAME),
    };

    ensure_dir(&root)?;
    Ok(root)
}

pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let custom = tmp.path().join("custom");
        let root = data_root_from(custom.to_str(), Some(tmp.path())).unwrap();
        assert_eq!(root, custom);
        assert!(root.is_dir());
    }

    #[test]
    fn test_blank_override_falls_back_to_system_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = data_root_from(Some("  "), Some(tmp.path())).unwrap();
        assert_eq!(root, tmp.path().join("breedex"));
    }

    #[test]
    fn test_no_system_dir_is_an_error() {
        assert!(matches!(
            data_root_from(None, None),
            Err(PathError::NoDataDir)
        ));
    }

    #[test]
    fn test_file_in_the_way_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            data_root_from(file.to_str(), None),
            Err(PathError::NotADirectory(_))
        ));
    }
}
