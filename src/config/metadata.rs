//! The generated version metadata file (e.g. `assets/version/app_version.json`)
//!
//! The file is regenerated wholesale: the previous contents must parse as a
//! JSON object, but none of its fields survive a rewrite.

use crate::error::MetadataError;
use crate::types::CommitHash;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Contents of the metadata file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMetadata {
    /// Version string copied from the manifest
    pub version: String,

    /// Generation time in milliseconds since the Unix epoch
    pub date: u64,

    /// Short commit hash, possibly empty
    pub commit: String,
}

impl VersionMetadata {
    /// Metadata stamped with the current wall-clock time
    pub fn now(version: impl Into<String>, commit: CommitHash) -> Self {
        VersionMetadata {
            version: version.into(),
            date: epoch_millis(),
            commit: commit.into(),
        }
    }

    /// Read and validate the existing metadata file
    ///
    /// Returns the parsed object so callers can report what is being
    /// replaced. Fails if the file is missing or not a JSON object.
    pub fn load_existing(
        path: impl AsRef<Path>,
    ) -> Result<serde_json::Map<String, serde_json::Value>, MetadataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_existing(&content)
    }

    /// Parse prior metadata contents from a string
    pub fn parse_existing(
        s: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>, MetadataError> {
        match serde_json::from_str::<serde_json::Value>(s)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(MetadataError::NotAnObject),
        }
    }

    /// Compact JSON encoding
    pub fn to_json_string(&self) -> Result<String, MetadataError> {
        serde_json::to_string(self).map_err(MetadataError::Serialize)
    }

    /// Overwrite `path` with this metadata
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MetadataError> {
        let path = path.as_ref();
        let content = self.to_json_string()?;
        fs::write(path, content).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Milliseconds since the Unix epoch; a clock before 1970 reads as 0
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
