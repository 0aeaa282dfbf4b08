// zipfscope-core/src/pipeline.rs
//! One-shot, non-interactive entry points that chain discovery, analysis,
//! scaling and report writing.
//!
//! Front-ends observe progress through [`ProgressObserver`]; the core never
//! draws anything itself.

use std::fmt;
use std::path::Path;

use log::{info, warn};

use crate::analysis::{analyze_corpus, CorpusAnalysis};
use crate::config::AnalysisConfig;
use crate::discovery::{discover_from_config, Corpus};
use crate::errors::AnalysisError;
use crate::plot::default_renderer;
use crate::report::{ReportOutcome, ReportWriter, RunSummary};
use crate::scaling::{ScalingAnalyzer, ScalingSeries};

/// The two passes made over the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Final cumulative read of every file.
    Reading,
    /// Incremental pass producing checkpoint snapshots.
    Scaling,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Reading => "Reading files",
            Phase::Scaling => "Scaling analysis",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives per-file progress notifications. All methods default to no-ops.
pub trait ProgressObserver {
    fn phase_started(&mut self, _phase: Phase, _total_files: usize) {}

    /// `index` is 1-based.
    fn file_processed(&mut self, _phase: Phase, _index: usize, _path: &Path) {}

    fn phase_finished(&mut self, _phase: Phase) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// In-memory results of both passes, before anything is written.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub corpus: Corpus,
    pub analysis: CorpusAnalysis,
    pub scaling: ScalingSeries,
}

/// Everything a front-end needs after a full pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    pub run: AnalysisRun,
    pub summary: RunSummary,
    pub outcome: ReportOutcome,
}

/// Validates the configuration, discovers the corpus and runs both passes.
///
/// Fails on an invalid configuration, a missing corpus root or an empty corpus.
/// Unreadable individual files are logged and treated as empty.
pub fn run_analysis(
    config: &AnalysisConfig,
    progress: &mut dyn ProgressObserver,
) -> Result<AnalysisRun, AnalysisError> {
    config
        .validate()
        .map_err(|e| AnalysisError::InvalidConfig(format!("{:#}", e)))?;

    let corpus = discover_from_config(config)?.require_non_empty()?;
    info!(
        "Discovered {} files under {} (fingerprint {}).",
        corpus.len(),
        corpus.root().display(),
        corpus.fingerprint()
    );

    let analysis = analyze_corpus(&corpus, progress);
    if analysis.is_empty() {
        warn!("No characters in the measured range were found in the corpus.");
    }

    let scaling = ScalingAnalyzer::run(&corpus, config.checkpoint_interval, progress)?;

    Ok(AnalysisRun { corpus, analysis, scaling })
}

/// Runs [`run_analysis`] and writes every artifact into `config.output_dir`.
///
/// Artifact failures do not make this function fail; inspect
/// [`PipelineReport::outcome`] for them.
pub fn run_pipeline(
    config: &AnalysisConfig,
    progress: &mut dyn ProgressObserver,
) -> Result<PipelineReport, AnalysisError> {
    let run = run_analysis(config, progress)?;
    let summary = RunSummary::new(config, &run.corpus, &run.analysis, &run.scaling);

    let writer = if config.plots {
        ReportWriter::new(&config.output_dir).with_renderer(default_renderer())
    } else {
        ReportWriter::new(&config.output_dir).without_plots()
    };
    let outcome = writer.write_all(&run.analysis, &run.scaling, &summary);

    Ok(PipelineReport { run, summary, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Recorder {
        events: Vec<(Phase, usize)>,
        started: Vec<(Phase, usize)>,
        finished: Vec<Phase>,
    }

    impl ProgressObserver for Recorder {
        fn phase_started(&mut self, phase: Phase, total_files: usize) {
            self.started.push((phase, total_files));
        }

        fn file_processed(&mut self, phase: Phase, index: usize, _path: &Path) {
            self.events.push((phase, index));
        }

        fn phase_finished(&mut self, phase: Phase) {
            self.finished.push(phase);
        }
    }

    fn write_corpus(root: &Path) {
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a").join("1.txt"), "啊的").unwrap();
        fs::write(root.join("a").join("2.txt"), "啊，的。").unwrap();
        fs::write(root.join("a").join("3.txt"), "是啊 abc").unwrap();
    }

    #[test]
    fn test_progress_is_reported_for_both_phases() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());
        let config = AnalysisConfig {
            corpus_root: dir.path().to_path_buf(),
            checkpoint_interval: 2,
            ..AnalysisConfig::default()
        };

        let mut recorder = Recorder::default();
        let run = run_analysis(&config, &mut recorder).unwrap();

        assert_eq!(recorder.started, vec![(Phase::Reading, 3), (Phase::Scaling, 3)]);
        assert_eq!(recorder.finished, vec![Phase::Reading, Phase::Scaling]);
        assert_eq!(recorder.events.len(), 6);
        assert_eq!(run.analysis.total_chars(), 6);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalysisConfig {
            checkpoint_interval: 0,
            ..AnalysisConfig::default()
        };
        let err = run_analysis(&config, &mut NoopProgress).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));
    }

    #[test]
    fn test_pipeline_writes_tables_without_plots() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(&dir.path().join("corpus"));
        let out: PathBuf = dir.path().join("out");
        let config = AnalysisConfig {
            corpus_root: dir.path().join("corpus"),
            output_dir: out.clone(),
            plots: false,
            ..AnalysisConfig::default()
        };

        let report = run_pipeline(&config, &mut NoopProgress).unwrap();
        assert!(!report.outcome.has_failures());
        assert!(out.join("char_probabilities.csv").is_file());
        assert!(out.join("rank_frequency.csv").is_file());
        assert!(out.join("scaling_results.csv").is_file());
        assert!(out.join("summary.json").is_file());
        assert!(!out.join("zipf_loglog.svg").exists());
    }
}
