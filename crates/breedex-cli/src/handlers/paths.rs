//! Paths command handler.
//!
//! Displays the resolved data paths for diagnostics.

use anyhow::Result;

use breedex_core::ResolvedPaths;

/// Execute the paths command.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
