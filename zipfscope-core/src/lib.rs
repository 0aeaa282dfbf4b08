// zipfscope-core/src/lib.rs
//! # Zipfscope Core Library
//!
//! `zipfscope-core` turns a directory tree of text files into character-level
//! statistics for the CJK Unified Ideographs block: a cumulative frequency
//! table, Shannon entropy, a rank-frequency (Zipf) fit and a scaling series
//! recording how those quantities evolve as files are added in order.
//!
//! The numeric work lives in `zipfscope-stats`; this crate adds the I/O around
//! it: configuration, corpus discovery, text cleaning, report writing and the
//! optional plotting capability.
//!
//! ## Modules
//!
//! * `config`: Defines [`AnalysisConfig`], YAML loading, overrides and validation.
//! * `discovery`: Deterministic enumeration of the corpus and its fingerprint.
//! * `cleaner`: Lossy decoding and text normalization.
//! * `extractor`: Filters cleaned text down to the measured character range.
//! * `analysis`: The final cumulative pass and the statistics derived from it.
//! * `scaling`: The incremental pass producing checkpoint snapshots.
//! * `report`: Writes tables, `summary.json` and plots.
//! * `plot`: The [`PlotRenderer`] trait and the SVG renderer (feature `plots`).
//! * `pipeline`: One-shot entry points and progress observation.
//! * `errors`: The [`AnalysisError`] enum.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use zipfscope_core::{run_pipeline, AnalysisConfig, NoopProgress};
//!
//! fn main() -> Result<(), zipfscope_core::AnalysisError> {
//!     let config = AnalysisConfig {
//!         corpus_root: "corpus".into(),
//!         ..AnalysisConfig::default()
//!     };
//!     let report = run_pipeline(&config, &mut NoopProgress)?;
//!     println!("entropy: {:.4} bits", report.run.analysis.entropy.entropy_bits);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only two conditions abort a run: a corpus root that is not a directory and
//! a corpus with no matching files. Unreadable files are logged and counted as
//! empty; failing artifacts are logged and reported per artifact.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod cleaner;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod extractor;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod scaling;

pub use analysis::{analyze_corpus, CharacterRow, CorpusAnalysis};
pub use cleaner::{clean_text, decode_lossy, read_cleaned};
pub use config::{merge_overrides, AnalysisConfig, ConfigOverrides};
pub use discovery::{discover_corpus, discover_from_config, Corpus, CorpusFile, FileFilter};
pub use errors::AnalysisError;
pub use extractor::{extract_measured, is_measured, MeasuredStream, MEASURED_RANGE};
pub use pipeline::{run_analysis, run_pipeline, AnalysisRun, NoopProgress, Phase, PipelineReport, ProgressObserver};
pub use plot::{default_renderer, PlotRenderer, RankFrequencySeries, ScalingPlotSeries};
pub use report::{ArtifactKind, ArtifactRecord, ArtifactStatus, ReportOutcome, ReportWriter, RunSummary};
pub use scaling::{ConvergenceSummary, ScalingAnalyzer, ScalingSeries, ScalingSnapshot};

/// Re-exports the statistics crate so front-ends need a single dependency.
pub use zipfscope_stats as stats;
