#![doc = include_str!("../README.md")]
// DefaultBreedApiClient is meant to be used through the BreedSource trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// Client
pub use client::DefaultBreedApiClient;

// Configuration
pub use config::{BreedApiConfig, CAT_API_BASE_URL, DOG_API_BASE_URL};
