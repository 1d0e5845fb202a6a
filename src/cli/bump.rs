//! Bump command implementation
//!
//! This module implements `verstamp increaseBuildNo`, which:
//! - Reads the manifest version, e.g. `1.2.3+41`
//! - Increments the build number after the `+`
//! - Writes the whole manifest back with only `version` changed
//!
//! A build segment that is not a number is not rejected; it becomes `NaN`.

use crate::cli::common::{EXIT_SUCCESS, Settings};
use crate::config::manifest::Manifest;
use crate::error::ManifestError;
use crate::types::AppVersion;
use log::{info, warn};

/// Error type specific to the bump command
#[derive(Debug, thiserror::Error)]
pub enum BumpError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Old and new manifest versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpResult {
    pub previous: String,
    pub current: String,
}

/// Run the bump command
///
/// Failures are logged as warnings; the exit code is always
/// [`EXIT_SUCCESS`].
pub fn run_bump(settings: &Settings) -> i32 {
    if let Err(e) = increase_build_number(settings) {
        warn!("{}", e);
    }

    EXIT_SUCCESS
}

/// Internal implementation of the bump command
pub fn increase_build_number(settings: &Settings) -> Result<BumpResult, BumpError> {
    let mut manifest = Manifest::load(&settings.manifest)?;
    let previous = manifest.version()?.to_string();

    let version = AppVersion::parse(&previous).with_incremented_build();
    if version.build_number().is_nan() {
        warn!(
            "Build number after '{}' in '{}' is not numeric; writing '{}'",
            version.base(),
            previous,
            version
        );
    }

    let current = version.to_string();
    manifest.set_version(current.as_str());
    info!("Increasing build no to version: {}", current);

    manifest.save(&settings.manifest)?;

    Ok(BumpResult { previous, current })
}
