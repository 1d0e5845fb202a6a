//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Mode switch that selects the build-number pipeline
pub const INCREASE_BUILD_NO: &str = "increaseBuildNo";

/// Verstamp CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "verstamp")]
#[command(
    about = "Sync version metadata with the project manifest, or bump its build number"
)]
#[command(version)]
pub struct Cli {
    /// Mode: omit to sync the metadata file, or `increaseBuildNo` to bump the build number
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Arguments after the mode are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Manifest path (overrides verstamp.toml)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Metadata path (overrides verstamp.toml)
    #[arg(long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Settings file
    #[arg(long, value_name = "PATH", default_value = "verstamp.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Pipeline selected by the positional mode argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write version, date, and commit to the metadata file
    Sync,
    /// Increment the manifest build number
    IncreaseBuildNo,
    /// Any other value; nothing runs
    Unknown(String),
}

impl Mode {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Mode::Sync,
            Some(INCREASE_BUILD_NO) => Mode::IncreaseBuildNo,
            Some(other) => Mode::Unknown(other.to_string()),
        }
    }
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::from_arg(self.mode.as_deref())
    }
}
