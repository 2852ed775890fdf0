//! Resolved path snapshot for CLI introspection.

use std::fmt;
use std::path::PathBuf;

use super::{PathError, data_root, database_path_in};

/// All resolved paths captured in a single struct.
///
/// Backs the `breedex paths` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        let data_root = data_root()?;
        let database_path = database_path_in(&data_root)?;
        Ok(Self {
            data_root,
            database_path,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data root: {}", self.data_root.display())?;
        write!(f, "Database:  {}", self.database_path.display())
    }
}
