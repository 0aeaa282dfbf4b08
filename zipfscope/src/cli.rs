// zipfscope/src/cli.rs
//! This file defines the command-line interface (CLI) for the zipfscope application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use zipfscope_core::ConfigOverrides;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "zipfscope",
    author = "Zipfscope Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Character frequency, entropy and Zipf scaling analysis for CJK text corpora",
    long_about = "Zipfscope reads a directory tree of text files in a deterministic order, counts the CJK Unified Ideographs it contains and reports the character probability distribution, its Shannon entropy, a log-log Zipf fit and how those quantities evolve as files are added. Results are written as CSV tables, a JSON summary and (optionally) SVG plots.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Hide progress bars even on an interactive terminal.
    #[arg(long = "no-progress", global = true, help = "Do not display progress bars.")]
    pub no_progress: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `zipfscope` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the full analysis and writes every report artifact.
    #[command(about = "Analyzes a corpus and writes tables, a JSON summary and plots.")]
    Analyze(AnalyzeCommand),

    /// Lists the input files in processing order.
    #[command(about = "Lists the discovered input files in processing order with the corpus fingerprint.")]
    Files(FilesCommand),
}

/// Arguments shared by every command that discovers a corpus.
#[derive(Args, Debug, Default, Clone)]
pub struct CorpusArgs {
    /// Corpus root directory (one subdirectory per group).
    #[arg(value_name = "ROOT", help = "Corpus root directory. Overrides `corpus_root` from the config file.")]
    pub root: Option<PathBuf>,

    /// Path to a YAML analysis configuration file.
    #[arg(long = "config", short = 'c', value_name = "FILE", help = "Path to a YAML analysis configuration file.")]
    pub config: Option<PathBuf>,

    /// Regex a subdirectory name must match.
    #[arg(long = "subdir-pattern", value_name = "REGEX", help = "Only descend into subdirectories whose names match this regex.")]
    pub subdir_pattern: Option<String>,

    /// Regex a file name must match.
    #[arg(long = "file-pattern", value_name = "REGEX", help = "Only read files whose names match this regex.")]
    pub file_pattern: Option<String>,
}

impl CorpusArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            corpus_root: self.root.clone(),
            subdir_pattern: self.subdir_pattern.clone(),
            file_pattern: self.file_pattern.clone(),
            ..ConfigOverrides::default()
        }
    }
}

/// Arguments for the `analyze` command.
#[derive(Args, Debug, Default)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Directory receiving the report artifacts.
    #[arg(long = "out", short = 'o', value_name = "DIR", help = "Write report artifacts into this directory.")]
    pub output_dir: Option<PathBuf>,

    /// Files between two scaling checkpoints.
    #[arg(long = "interval", short = 'n', value_name = "N", help = "Record a scaling snapshot every N files.")]
    pub interval: Option<usize>,

    /// Skip plot artifacts.
    #[arg(long = "no-plots", help = "Do not render plot artifacts.")]
    pub no_plots: bool,

    /// Rows of the top-characters table.
    #[arg(long = "top", value_name = "N", help = "Number of top-ranked characters shown in the console summary.")]
    pub top: Option<usize>,

    /// Print the JSON summary to stdout instead of tables.
    #[arg(long = "json", help = "Print the run summary as JSON to stdout.")]
    pub json: bool,
}

impl AnalyzeCommand {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output_dir: self.output_dir.clone(),
            checkpoint_interval: self.interval,
            plots: if self.no_plots { Some(false) } else { None },
            top_n: self.top,
            ..self.corpus.overrides()
        }
    }
}

/// Arguments for the `files` command.
#[derive(Args, Debug, Default)]
pub struct FilesCommand {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Print the listing as JSON.
    #[arg(long = "json", help = "Print the listing and fingerprint as JSON to stdout.")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_flags_become_overrides() {
        let cli = Cli::parse_from([
            "zipfscope", "analyze", "corpus", "--out", "reports", "--interval", "5", "--no-plots", "--top", "3",
        ]);
        let Commands::Analyze(cmd) = cli.command else {
            panic!("expected analyze");
        };
        let overrides = cmd.overrides();
        assert_eq!(overrides.corpus_root, Some(PathBuf::from("corpus")));
        assert_eq!(overrides.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(overrides.checkpoint_interval, Some(5));
        assert_eq!(overrides.plots, Some(false));
        assert_eq!(overrides.top_n, Some(3));
        assert_eq!(overrides.file_pattern, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["zipfscope", "files", "corpus", "-q", "--no-progress"]);
        assert!(cli.quiet);
        assert!(cli.no_progress);
    }
}
