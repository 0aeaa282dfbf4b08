// zipfscope-core/src/report.rs
//! Writes the analysis artifacts into the output directory.
//!
//! Every artifact is attempted on its own. A failure is logged, recorded in the
//! returned [`ReportOutcome`], and never prevents the remaining artifacts from
//! being written.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serde::Serialize;

use crate::analysis::CorpusAnalysis;
use crate::config::AnalysisConfig;
use crate::discovery::Corpus;
use crate::errors::AnalysisError;
use crate::plot::{PlotRenderer, RankFrequencySeries, ScalingPlotSeries};
use crate::scaling::{ConvergenceSummary, ScalingSeries};

pub const CHARACTER_TABLE_FILE: &str = "char_probabilities.csv";
pub const RANK_TABLE_FILE: &str = "rank_frequency.csv";
pub const SCALING_TABLE_FILE: &str = "scaling_results.csv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const ZIPF_PLOT_STEM: &str = "zipf_loglog";
pub const SCALING_PLOT_STEM: &str = "scaling_entropy_slope";

const CHARACTER_TABLE_HEADER: &str = "char,frequency,probability";
const RANK_TABLE_HEADER: &str = "rank,char,frequency";
const SCALING_TABLE_HEADER: &str = "files_cumulative,unique_chars,total_chars,entropy_bits,zipf_slope,zipf_r2";

/// The artifacts a report run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    CharacterTable,
    RankFrequencyTable,
    ScalingTable,
    Summary,
    ZipfPlot,
    ScalingPlot,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::CharacterTable,
        ArtifactKind::RankFrequencyTable,
        ArtifactKind::ScalingTable,
        ArtifactKind::Summary,
        ArtifactKind::ZipfPlot,
        ArtifactKind::ScalingPlot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::CharacterTable => "character probabilities",
            ArtifactKind::RankFrequencyTable => "rank-frequency table",
            ArtifactKind::ScalingTable => "scaling results",
            ArtifactKind::Summary => "run summary",
            ArtifactKind::ZipfPlot => "Zipf log-log plot",
            ArtifactKind::ScalingPlot => "scaling plot",
        }
    }

    pub fn is_plot(&self) -> bool {
        matches!(self, ArtifactKind::ZipfPlot | ArtifactKind::ScalingPlot)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactStatus {
    Written { path: PathBuf },
    Skipped { reason: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub artifact: ArtifactKind,
    #[serde(flatten)]
    pub status: ArtifactStatus,
}

/// Per-artifact result of [`ReportWriter::write_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportOutcome {
    pub artifacts: Vec<ArtifactRecord>,
}

impl ReportOutcome {
    fn record(&mut self, artifact: ArtifactKind, result: Result<PathBuf, AnalysisError>) {
        let status = match result {
            Ok(path) => {
                info!("Wrote {} to {}", artifact, path.display());
                ArtifactStatus::Written { path }
            }
            Err(e) => {
                error!("Failed to write {}: {}", artifact, e);
                ArtifactStatus::Failed { message: e.to_string() }
            }
        };
        self.artifacts.push(ArtifactRecord { artifact, status });
    }

    fn skip(&mut self, artifact: ArtifactKind, reason: impl Into<String>) {
        let reason = reason.into();
        info!("Skipping {}: {}", artifact, reason);
        self.artifacts.push(ArtifactRecord {
            artifact,
            status: ArtifactStatus::Skipped { reason },
        });
    }

    pub fn status(&self, artifact: ArtifactKind) -> Option<&ArtifactStatus> {
        self.artifacts
            .iter()
            .find(|r| r.artifact == artifact)
            .map(|r| &r.status)
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().filter_map(|r| match &r.status {
            ArtifactStatus::Written { path } => Some(path.as_path()),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.artifacts
            .iter()
            .filter(|r| matches!(r.status, ArtifactStatus::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Zipf fit as it appears in `summary.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZipfSummary {
    pub intercept: f64,
    pub slope: f64,
    pub r_squared: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCharacter {
    pub rank: usize,
    #[serde(rename = "char")]
    pub character: char,
    pub frequency: u64,
}

/// Machine-readable summary of a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub corpus_root: PathBuf,
    pub files: usize,
    pub corpus_bytes: u64,
    pub fingerprint: String,
    pub total_chars: u64,
    pub unique_chars: usize,
    pub entropy_bits: f64,
    pub max_entropy_bits: f64,
    pub zipf: ZipfSummary,
    pub checkpoint_interval: usize,
    pub checkpoints: usize,
    pub convergence: Option<ConvergenceSummary>,
    pub top_characters: Vec<TopCharacter>,
}

impl RunSummary {
    pub fn new(
        config: &AnalysisConfig,
        corpus: &Corpus,
        analysis: &CorpusAnalysis,
        scaling: &ScalingSeries,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            corpus_root: corpus.root().to_path_buf(),
            files: corpus.len(),
            corpus_bytes: corpus.total_bytes(),
            fingerprint: corpus.fingerprint(),
            total_chars: analysis.total_chars(),
            unique_chars: analysis.unique_chars(),
            entropy_bits: analysis.entropy.entropy_bits,
            max_entropy_bits: analysis.entropy.max_entropy_bits(),
            zipf: ZipfSummary {
                intercept: analysis.zipf.intercept,
                slope: analysis.zipf.slope,
                r_squared: analysis.zipf.r_squared,
            },
            checkpoint_interval: config.checkpoint_interval,
            checkpoints: scaling.len(),
            convergence: scaling.convergence(config.convergence_window),
            top_characters: analysis
                .top(config.top_n)
                .iter()
                .map(|e| TopCharacter {
                    rank: e.rank,
                    character: e.character,
                    frequency: e.frequency,
                })
                .collect(),
        }
    }
}

enum PlotMode {
    Render(Box<dyn PlotRenderer>),
    Unavailable,
    Disabled,
}

/// Writes tables, summary and plots into one output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
    plots: PlotMode,
}

impl ReportWriter {
    /// A writer with no plotting capability attached.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            plots: PlotMode::Unavailable,
        }
    }

    pub fn with_renderer(mut self, renderer: Option<Box<dyn PlotRenderer>>) -> Self {
        self.plots = match renderer {
            Some(r) => PlotMode::Render(r),
            None => PlotMode::Unavailable,
        };
        self
    }

    /// Plots are skipped even when a renderer is attached.
    pub fn without_plots(mut self) -> Self {
        self.plots = PlotMode::Disabled;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn write_all(
        &self,
        analysis: &CorpusAnalysis,
        scaling: &ScalingSeries,
        summary: &RunSummary,
    ) -> ReportOutcome {
        let mut outcome = ReportOutcome::default();

        if let Err(e) = fs::create_dir_all(&self.output_dir) {
            // Each artifact below will report its own failure.
            error!("Cannot create output directory {}: {}", self.output_dir.display(), e);
        }

        outcome.record(ArtifactKind::CharacterTable, self.write_character_table(analysis));
        outcome.record(ArtifactKind::RankFrequencyTable, self.write_rank_table(analysis));
        outcome.record(ArtifactKind::ScalingTable, self.write_scaling_table(scaling));
        outcome.record(ArtifactKind::Summary, self.write_summary(summary));

        match &self.plots {
            PlotMode::Disabled => {
                outcome.skip(ArtifactKind::ZipfPlot, "plots disabled");
                outcome.skip(ArtifactKind::ScalingPlot, "plots disabled");
            }
            PlotMode::Unavailable => {
                outcome.skip(ArtifactKind::ZipfPlot, "no plotting capability in this build");
                outcome.skip(ArtifactKind::ScalingPlot, "no plotting capability in this build");
            }
            PlotMode::Render(renderer) => {
                debug!("Rendering plots with the '{}' renderer", renderer.name());
                let ranks = RankFrequencySeries::from_ranked(&analysis.rank_frequency);
                if ranks.is_empty() {
                    outcome.skip(ArtifactKind::ZipfPlot, "no measured characters");
                } else {
                    let path = self.plot_path(ZIPF_PLOT_STEM, renderer.as_ref());
                    let result = renderer.render_rank_frequency(&ranks, &path).map(|_| path);
                    outcome.record(ArtifactKind::ZipfPlot, result);
                }

                let series = ScalingPlotSeries::from_series(scaling);
                if series.is_empty() {
                    outcome.skip(ArtifactKind::ScalingPlot, "no scaling snapshots");
                } else {
                    let path = self.plot_path(SCALING_PLOT_STEM, renderer.as_ref());
                    let result = renderer.render_scaling(&series, &path).map(|_| path);
                    outcome.record(ArtifactKind::ScalingPlot, result);
                }
            }
        }

        outcome
    }

    fn plot_path(&self, stem: &str, renderer: &dyn PlotRenderer) -> PathBuf {
        self.output_dir.join(format!("{}.{}", stem, renderer.extension()))
    }

    fn create(&self, file_name: &str) -> Result<(PathBuf, BufWriter<File>), AnalysisError> {
        let path = self.output_dir.join(file_name);
        let file = File::create(&path)?;
        Ok((path, BufWriter::new(file)))
    }

    /// `char,frequency,probability` by descending frequency.
    pub fn write_character_table(&self, analysis: &CorpusAnalysis) -> Result<PathBuf, AnalysisError> {
        let (path, mut writer) = self.create(CHARACTER_TABLE_FILE)?;
        writeln!(writer, "{}", CHARACTER_TABLE_HEADER)?;
        for row in analysis.character_rows() {
            writeln!(writer, "{},{},{}", row.character, row.frequency, row.probability)?;
        }
        writer.flush()?;
        Ok(path)
    }

    /// `rank,char,frequency` by increasing rank.
    pub fn write_rank_table(&self, analysis: &CorpusAnalysis) -> Result<PathBuf, AnalysisError> {
        let (path, mut writer) = self.create(RANK_TABLE_FILE)?;
        writeln!(writer, "{}", RANK_TABLE_HEADER)?;
        for entry in &analysis.rank_frequency {
            writeln!(writer, "{},{},{}", entry.rank, entry.character, entry.frequency)?;
        }
        writer.flush()?;
        Ok(path)
    }

    pub fn write_scaling_table(&self, scaling: &ScalingSeries) -> Result<PathBuf, AnalysisError> {
        let (path, mut writer) = self.create(SCALING_TABLE_FILE)?;
        writeln!(writer, "{}", SCALING_TABLE_HEADER)?;
        for s in scaling.iter() {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                s.files_cumulative, s.unique_chars, s.total_chars, s.entropy_bits, s.zipf_slope, s.zipf_r2
            )?;
        }
        writer.flush()?;
        Ok(path)
    }

    pub fn write_summary(&self, summary: &RunSummary) -> Result<PathBuf, AnalysisError> {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| AnalysisError::Serialization(e.to_string()))?;
        let path = self.output_dir.join(SUMMARY_FILE);
        fs::write(&path, json)?;
        Ok(path)
    }
}
