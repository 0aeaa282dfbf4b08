// zipfscope/src/main.rs
//! Zipfscope entry point.
//!
//! Parses arguments, installs the logger and theme, then hands over to the
//! command dispatcher. Fatal errors are printed once and exit with status 1;
//! argument errors are reported by clap with status 2.

use std::process::ExitCode;

use clap::Parser;

use zipfscope::cli::Cli;
use zipfscope::commands::error_msg;
use zipfscope::logger;
use zipfscope::ui::theme::{build_theme_map, ThemeStyle};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A local .env may carry RUST_LOG.
    let _ = dotenvy::dotenv();
    logger::init_logger(logger::level_for_flags(cli.quiet, cli.debug));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme) => theme,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match zipfscope::run(cli, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
