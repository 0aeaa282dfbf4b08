//! errors.rs - Custom error types for the zipfscope-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `zipfscope-core` library.
///
/// The two fatal conditions of a run are `NotADirectory` (the corpus root is
/// missing or not a directory) and `EmptyCorpus` (discovery found no files).
/// Everything that goes wrong for a single input file is recovered locally
/// and never surfaces here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("Corpus root '{}' does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No input files found under '{}'; check the corpus root and file patterns", .0.display())]
    EmptyCorpus(PathBuf),

    #[error("Invalid {0} pattern: {1}")]
    InvalidPattern(String, regex::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to render plot: {0}")]
    Plot(String),

    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl AnalysisError {
    /// True for errors that abort a run before any analysis happens.
    pub fn is_fatal_input_error(&self) -> bool {
        matches!(self, AnalysisError::NotADirectory(_) | AnalysisError::EmptyCorpus(_))
    }
}
