// zipfscope/src/lib.rs
//! # Zipfscope CLI Application
//!
//! This crate provides the command-line front end for `zipfscope-core`:
//! argument parsing, logging setup, themed console output and progress bars.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::commands::analyze::{run_analyze, AnalyzeOptions};
use crate::commands::files::run_files;
use crate::commands::resolve_config;
use crate::ui::theme::ThemeMap;

/// Dispatches a parsed command line.
pub fn run(cli: Cli, theme_map: &ThemeMap) -> Result<()> {
    match cli.command {
        Commands::Analyze(cmd) => {
            let config = resolve_config(cmd.corpus.config.as_deref(), cmd.overrides())?;
            let opts = AnalyzeOptions {
                json: cmd.json,
                quiet: cli.quiet,
                show_progress: !cli.no_progress,
            };
            run_analyze(&config, opts, theme_map)
        }
        Commands::Files(cmd) => {
            let config = resolve_config(cmd.corpus.config.as_deref(), cmd.corpus.overrides())?;
            run_files(&config, cmd.json, cli.quiet, theme_map)
        }
    }
}
