//! Verstamp CLI entry point

use clap::Parser;
use log::LevelFilter;
use std::process;
use verstamp::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
        .ok();

    process::exit(cli::dispatch(&cli));
}
