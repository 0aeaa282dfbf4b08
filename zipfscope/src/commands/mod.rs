// zipfscope/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod analyze;
pub mod files;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;

use zipfscope_core::{merge_overrides, AnalysisConfig, ConfigOverrides};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Loads the optional config file and applies command-line overrides on top.
pub fn resolve_config(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<AnalysisConfig> {
    let base = match config_path {
        Some(path) => AnalysisConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    let config = merge_overrides(base, overrides);
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}
