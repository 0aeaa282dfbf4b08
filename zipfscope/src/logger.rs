// zipfscope/src/logger.rs
//! Logging setup for the CLI.
//!
//! All library crates log through the `log` facade; this is the single place
//! where a backend is installed. Logs go to stderr so stdout stays reserved for
//! command output.

use env_logger::{Builder, Env};
use log::LevelFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs `env_logger`.
///
/// `RUST_LOG` is honoured unless `level_override` is given, in which case it
/// wins for every module. Calling this twice is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);

    // Tests and embedding callers may already have installed a logger.
    let _ = builder.try_init();
}

/// Maps the global `--quiet` / `--debug` flags to a level override.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Error)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
