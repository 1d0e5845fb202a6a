//! Sync command implementation
//!
//! Runs when no mode argument is given. It:
//! - Asks git for the short hash of the current checkout
//! - Reads the version string from the manifest
//! - Checks that the existing metadata file is a JSON object
//! - Overwrites the metadata file with `{version, date, commit}`

use crate::cli::common::{EXIT_SUCCESS, Settings};
use crate::config::manifest::Manifest;
use crate::config::metadata::VersionMetadata;
use crate::error::{ManifestError, MetadataError};
use crate::git::CommitQuery;
use log::{debug, info, warn};

/// Error type specific to the sync command
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

/// What a successful sync wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResult {
    /// The metadata that was written
    pub written: VersionMetadata,
    /// Keys from the previous metadata file that were not carried over
    pub dropped_keys: Vec<String>,
}

/// Run the sync command
///
/// Failures are logged as warnings; the exit code is always
/// [`EXIT_SUCCESS`].
pub fn run_sync(settings: &Settings) -> i32 {
    info!("Updating app version in: {}", settings.metadata.display());

    if let Err(e) = sync_version(settings) {
        warn!("{}", e);
    }

    EXIT_SUCCESS
}

/// Internal implementation of the sync command
pub fn sync_version(settings: &Settings) -> Result<SyncResult, SyncError> {
    // 1. Commit hash; never fails, may be empty
    let commit = CommitQuery::new(&settings.git_program).run().commit;

    // 2. Version from the manifest
    let manifest = Manifest::load(&settings.manifest)?;
    let version = manifest.version()?.to_string();

    // 3. Previous metadata must exist and be an object
    let previous = VersionMetadata::load_existing(&settings.metadata)?;

    // 4. Rewrite with exactly version, date and commit
    let written = VersionMetadata::now(version, commit);
    written.save(&settings.metadata)?;

    let dropped_keys: Vec<String> = previous
        .keys()
        .filter(|key| !matches!(key.as_str(), "version" | "date" | "commit"))
        .cloned()
        .collect();
    if !dropped_keys.is_empty() {
        debug!("Dropped metadata keys: {}", dropped_keys.join(", "));
    }

    debug!(
        "Wrote version={} date={} commit={}",
        written.version, written.date, written.commit
    );

    Ok(SyncResult {
        written,
        dropped_keys,
    })
}
