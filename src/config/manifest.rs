//! Reading and rewriting the project manifest (e.g. `pubspec.yaml`)
//!
//! The manifest is treated as an opaque YAML document. Only the top-level
//! `version` key is interpreted; every other key is carried through a
//! load/save cycle unchanged in value, though not necessarily in formatting.

use crate::error::ManifestError;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const VERSION_KEY: &str = "version";

/// A parsed manifest document
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Value,
}

impl Manifest {
    /// Load a manifest from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string
    pub fn parse(s: &str) -> Result<Self, ManifestError> {
        let document: Value = serde_yaml::from_str(s)?;
        if !document.is_mapping() {
            return Err(ManifestError::NotAMapping);
        }
        Ok(Manifest { document })
    }

    /// The top-level `version` string
    pub fn version(&self) -> Result<&str, ManifestError> {
        match self.document.get(VERSION_KEY) {
            None | Some(Value::Null) => Err(ManifestError::MissingVersion),
            Some(Value::String(version)) => Ok(version.as_str()),
            Some(other) => Err(ManifestError::InvalidVersion(describe(other))),
        }
    }

    /// Replace the top-level `version` string
    ///
    /// `Mapping::insert` keeps the slot of an existing key, so the key order
    /// of the document survives.
    pub fn set_version(&mut self, version: impl Into<String>) {
        if let Some(mapping) = self.document.as_mapping_mut() {
            mapping.insert(
                Value::String(VERSION_KEY.to_string()),
                Value::String(version.into()),
            );
        }
    }

    /// The underlying YAML document
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Serialize the whole document back to YAML
    pub fn to_yaml_string(&self) -> Result<String, ManifestError> {
        serde_yaml::to_string(&self.document).map_err(ManifestError::Serialize)
    }

    /// Overwrite `path` with the serialized document
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let path = path.as_ref();
        let content = self.to_yaml_string()?;
        fs::write(path, content).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(n) => format!("the number {}", n),
        Value::String(_) => "a string".to_string(),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(_) => "a tagged value".to_string(),
    }
}
