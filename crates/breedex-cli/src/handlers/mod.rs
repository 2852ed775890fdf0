//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Resolve CLI-only input (species fallback, page size)
//! - Call `AppCore` methods
//! - Format output for the terminal
//!
//! Handlers never touch repositories or the database directly.

pub mod config;
pub mod favorite;
pub mod filters;
pub mod list;
pub mod paths;
pub mod refresh;
pub mod search;
pub mod show;
pub mod stats;
