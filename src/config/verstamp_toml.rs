//! Parsing for the optional verstamp.toml settings file

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "verstamp.toml";

/// Default manifest location
pub const DEFAULT_MANIFEST: &str = "pubspec.yaml";

/// Default metadata location
pub const DEFAULT_METADATA: &str = "assets/version/app_version.json";

/// Default version-control executable
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Main configuration struct for verstamp.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Version-control settings
    #[serde(default)]
    pub git: GitConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.manifest.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.manifest".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        if self.paths.metadata.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.metadata".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        if self.git.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "git.program".to_string(),
                message: "program must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// `[paths]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Project manifest holding the authoritative version
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Generated metadata file
    #[serde(default = "default_metadata")]
    pub metadata: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            metadata: default_metadata(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_metadata() -> PathBuf {
    PathBuf::from(DEFAULT_METADATA)
}

/// `[git]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Executable used for the commit query
    #[serde(default = "default_git_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_git_program(),
        }
    }
}

fn default_git_program() -> String {
    DEFAULT_GIT_PROGRAM.to_string()
}
