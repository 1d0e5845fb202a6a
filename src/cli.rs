//! CLI argument parsing and mode dispatch

pub mod args;
pub mod bump;
pub mod common;
pub mod sync;

// Re-export types for convenient access
pub use args::{Cli, INCREASE_BUILD_NO, Mode};
pub use common::{EXIT_SUCCESS, Settings};

use log::{debug, warn};

/// Run the pipeline selected by the mode argument
///
/// An unknown mode touches no files, including verstamp.toml.
pub fn dispatch(cli: &Cli) -> i32 {
    let mode = cli.mode();
    if let Mode::Unknown(arg) = &mode {
        debug!("Ignoring unknown mode '{}'", arg);
        return EXIT_SUCCESS;
    }

    let settings = match common::load_settings(
        &cli.config,
        cli.manifest.clone(),
        cli.metadata.clone(),
    ) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load {}: {}", cli.config.display(), e);
            return EXIT_SUCCESS;
        }
    };

    match mode {
        Mode::Sync => sync::run_sync(&settings),
        Mode::IncreaseBuildNo => bump::run_bump(&settings),
        Mode::Unknown(_) => EXIT_SUCCESS,
    }
}
