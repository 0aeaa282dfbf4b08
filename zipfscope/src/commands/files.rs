// zipfscope/src/commands/files.rs
//! The `files` command: prints the corpus in processing order.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use zipfscope_core::{discover_from_config, AnalysisConfig};

use crate::commands::info_msg;
use crate::ui::theme::ThemeMap;

#[derive(Debug, Serialize)]
struct FileListing {
    root: PathBuf,
    fingerprint: String,
    total_bytes: u64,
    files: Vec<String>,
}

pub fn run_files(config: &AnalysisConfig, json: bool, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let corpus = discover_from_config(config)
        .and_then(|c| c.require_non_empty())
        .context("Corpus discovery failed")?;

    let listing = FileListing {
        root: corpus.root().to_path_buf(),
        fingerprint: corpus.fingerprint(),
        total_bytes: corpus.total_bytes(),
        files: corpus.iter().map(|f| f.relative_name()).collect(),
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut writer, &listing).context("Failed to print JSON listing")?;
        writeln!(writer)?;
        return Ok(());
    }

    for name in &listing.files {
        writeln!(writer, "{}", name)?;
    }
    if !quiet {
        info_msg(
            format!(
                "{} files, {} bytes, fingerprint {}",
                listing.files.len(),
                listing.total_bytes,
                listing.fingerprint
            ),
            theme_map,
        );
    }
    Ok(())
}
