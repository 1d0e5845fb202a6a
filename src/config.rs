//! File formats: the manifest, the metadata file, and verstamp.toml

pub mod manifest;
pub mod metadata;
pub mod verstamp_toml;

pub use manifest::Manifest;
pub use metadata::VersionMetadata;
pub use verstamp_toml::{Config, GitConfig, PathsConfig};
