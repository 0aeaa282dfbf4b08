//! Configuration management for `zipfscope-core`.
//!
//! This module defines the configuration value that drives a whole analysis run:
//! where the corpus lives, which files count as input, how often the scaling
//! analysis records a checkpoint and where reports go. It handles
//! deserialization of YAML configuration files, merging of command-line
//! overrides and validation. The value is passed explicitly into the pipeline;
//! nothing here is global.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of files between two scaling checkpoints.
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 10;
/// File names accepted as corpus input.
pub const DEFAULT_FILE_PATTERN: &str = r"(?i)\.txt$";
/// Subdirectory names descended into during discovery.
pub const DEFAULT_SUBDIR_PATTERN: &str = ".*";
pub const DEFAULT_OUTPUT_DIR: &str = "analysis_output";
pub const DEFAULT_TOP_N: usize = 20;
/// Trailing snapshots considered when summarizing convergence.
pub const DEFAULT_CONVERGENCE_WINDOW: usize = 5;

/// Represents the top-level configuration structure for an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory holding one subdirectory per logical group (e.g. per date).
    pub corpus_root: PathBuf,
    /// Regex a subdirectory name must match to be scanned.
    pub subdir_pattern: String,
    /// Regex a file name must match to be read.
    pub file_pattern: String,
    /// Record a scaling snapshot every N files (first and last file are always recorded).
    pub checkpoint_interval: usize,
    /// Destination directory for tables, summary and plots.
    pub output_dir: PathBuf,
    /// Render plot artifacts when a plotting capability is available.
    pub plots: bool,
    /// Number of top-ranked characters shown in console summaries.
    pub top_n: usize,
    pub convergence_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from("."),
            subdir_pattern: DEFAULT_SUBDIR_PATTERN.to_string(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            plots: true,
            top_n: DEFAULT_TOP_N,
            convergence_window: DEFAULT_CONVERGENCE_WINDOW,
        }
    }
}

/// Optional values that replace fields of a loaded configuration,
/// typically filled from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub corpus_root: Option<PathBuf>,
    pub subdir_pattern: Option<String>,
    pub file_pattern: Option<String>,
    pub checkpoint_interval: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub plots: Option<bool>,
    pub top_n: Option<usize>,
}

impl AnalysisConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AnalysisConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.checkpoint_interval == 0 {
            errors.push("`checkpoint_interval` must be greater than 0.".to_string());
        }
        if self.convergence_window == 0 {
            errors.push("`convergence_window` must be greater than 0.".to_string());
        }
        if let Err(e) = Regex::new(&self.subdir_pattern) {
            errors.push(format!("`subdir_pattern` is not a valid regex: {}", e));
        }
        if let Err(e) = Regex::new(&self.file_pattern) {
            errors.push(format!("`file_pattern` is not a valid regex: {}", e));
        }
        if self.output_dir.as_os_str().is_empty() {
            errors.push("`output_dir` cannot be empty.".to_string());
        }

        if !errors.is_empty() {
            let full_error_message = format!("Configuration validation failed:\n{}", errors.join("\n"));
            Err(anyhow!(full_error_message))
        } else {
            Ok(())
        }
    }
}

/// Applies command-line overrides on top of a base configuration.
pub fn merge_overrides(base: AnalysisConfig, overrides: ConfigOverrides) -> AnalysisConfig {
    let mut merged = base;

    if let Some(root) = overrides.corpus_root {
        debug!("Overriding corpus root with: {}", root.display());
        merged.corpus_root = root;
    }
    if let Some(pattern) = overrides.subdir_pattern {
        debug!("Overriding subdirectory pattern with: {}", pattern);
        merged.subdir_pattern = pattern;
    }
    if let Some(pattern) = overrides.file_pattern {
        debug!("Overriding file pattern with: {}", pattern);
        merged.file_pattern = pattern;
    }
    if let Some(interval) = overrides.checkpoint_interval {
        debug!("Overriding checkpoint interval with: {}", interval);
        merged.checkpoint_interval = interval;
    }
    if let Some(dir) = overrides.output_dir {
        debug!("Overriding output directory with: {}", dir.display());
        merged.output_dir = dir;
    }
    if let Some(plots) = overrides.plots {
        merged.plots = plots;
    }
    if let Some(top_n) = overrides.top_n {
        merged.top_n = top_n;
    }

    merged
}
