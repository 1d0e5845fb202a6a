//! Error types for verstamp
//!
//! Each file verstamp touches gets its own error enum. The command modules
//! wrap these into their own per-command errors, which are reported as
//! warnings at the command boundary and never abort the process.

use std::path::PathBuf;

/// Errors loading `verstamp.toml`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors reading or writing the project manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid YAML
    #[error("Invalid manifest syntax: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document could not be written back out as YAML
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// Manifest has no top-level `version` key
    #[error("Manifest has no top-level 'version' field")]
    MissingVersion,

    /// `version` is present but not a string
    #[error("Manifest 'version' must be a string, found {0}")]
    InvalidVersion(String),

    /// The document root is not a mapping
    #[error("Manifest root must be a mapping")]
    NotAMapping,
}

/// Errors reading or writing the version metadata file
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata is not valid JSON
    #[error("Invalid metadata JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The new metadata could not be encoded as JSON
    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Metadata parsed, but is not a JSON object
    #[error("Metadata must be a JSON object")]
    NotAnObject,
}
