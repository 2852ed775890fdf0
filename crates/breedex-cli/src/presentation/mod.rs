//! Shared CLI presentation utilities.
//!
//! Format-only helpers; domain transforms belong in core services.

pub mod breed_display;
pub mod tables;

pub use breed_display::{display_breed_details, format_lifespan, print_breed_table};
pub use tables::{print_separator, truncate_string};
