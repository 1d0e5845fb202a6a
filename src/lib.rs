#![forbid(unsafe_code)]

//! Verstamp: keep generated version metadata in step with the project manifest
//!
//! Without a mode argument, verstamp copies the manifest version into the
//! metadata file along with the current time and short commit hash. With
//! `increaseBuildNo`, it bumps the build number after the `+` in the
//! manifest version instead.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, ManifestError, MetadataError};

// Re-export core domain types for convenient access
pub use types::{AppVersion, BuildNumber, CommitHash};
