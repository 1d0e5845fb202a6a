//! Common helpers shared across the sync and bump pipelines

use crate::config::verstamp_toml::Config;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Exit code after dispatch. Pipeline failures are warnings, not exit codes.
pub const EXIT_SUCCESS: i32 = 0;

/// Resolved locations and tools for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub manifest: PathBuf,
    pub metadata: PathBuf,
    pub git_program: String,
}

impl Settings {
    /// Settings from a loaded config, with optional command-line overrides
    pub fn resolve(
        config: Config,
        manifest_override: Option<PathBuf>,
        metadata_override: Option<PathBuf>,
    ) -> Self {
        Settings {
            manifest: manifest_override.unwrap_or(config.paths.manifest),
            metadata: metadata_override.unwrap_or(config.paths.metadata),
            git_program: config.git.program,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::resolve(Config::default(), None, None)
    }
}

/// Load verstamp.toml (if present) and apply the overrides
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file exists but cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::InvalidValue` if it is invalid.
pub fn load_settings(
    config_path: &Path,
    manifest_override: Option<PathBuf>,
    metadata_override: Option<PathBuf>,
) -> Result<Settings, ConfigError> {
    let config = Config::load_or_default(config_path)?;
    Ok(Settings::resolve(config, manifest_override, metadata_override))
}
