// zipfscope-core/src/scaling.rs
//! Incremental analysis over a growing prefix of the corpus.
//!
//! Files are visited in corpus order and accumulated into one running
//! frequency table. After file `i` (1-based) a [`ScalingSnapshot`] is taken
//! when `i == 1`, when `i` is a multiple of the checkpoint interval, or when
//! `i` is the last file. The resulting series shows whether entropy and the
//! Zipf slope settle as documents are added.

use log::{debug, info};
use serde::Serialize;

use zipfscope_stats::entropy::shannon_entropy;
use zipfscope_stats::frequency::FrequencyTable;
use zipfscope_stats::statistics::{compute_stats, SeriesStats};
use zipfscope_stats::zipf::fit_power_law;

use crate::cleaner::read_cleaned;
use crate::discovery::Corpus;
use crate::errors::AnalysisError;
use crate::extractor::{extract_measured, MeasuredStream};
use crate::pipeline::{Phase, ProgressObserver};

/// Corpus statistics at one cumulative file count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingSnapshot {
    pub files_cumulative: usize,
    pub unique_chars: usize,
    pub total_chars: u64,
    pub entropy_bits: f64,
    pub zipf_slope: f64,
    pub zipf_r2: f64,
}

impl ScalingSnapshot {
    fn capture(files_cumulative: usize, table: &FrequencyTable) -> Self {
        let fit = fit_power_law(table);
        Self {
            files_cumulative,
            unique_chars: table.unique(),
            total_chars: table.snapshot_total(),
            entropy_bits: shannon_entropy(table),
            zipf_slope: fit.slope,
            zipf_r2: fit.r_squared,
        }
    }
}

/// Spread of entropy and slope over the most recent snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceSummary {
    /// Number of snapshots actually used (at most the requested window).
    pub window: usize,
    pub entropy_mean: f64,
    pub entropy_std_dev: f64,
    pub slope_mean: f64,
    pub slope_std_dev: f64,
}

/// Ordered snapshots, increasing in `files_cumulative`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScalingSeries {
    pub snapshots: Vec<ScalingSnapshot>,
}

impl ScalingSeries {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScalingSnapshot> {
        self.snapshots.iter()
    }

    pub fn last(&self) -> Option<&ScalingSnapshot> {
        self.snapshots.last()
    }

    /// Mean and standard deviation of entropy and slope over the trailing `window` snapshots.
    pub fn convergence(&self, window: usize) -> Option<ConvergenceSummary> {
        if window == 0 || self.snapshots.is_empty() {
            return None;
        }

        let tail = &self.snapshots[self.snapshots.len().saturating_sub(window)..];
        let entropies: Vec<f64> = tail.iter().map(|s| s.entropy_bits).collect();
        let slopes: Vec<f64> = tail.iter().map(|s| s.zipf_slope).collect();
        let SeriesStats { mean: entropy_mean, std_dev: entropy_std_dev } = compute_stats(&entropies);
        let SeriesStats { mean: slope_mean, std_dev: slope_std_dev } = compute_stats(&slopes);

        Some(ConvergenceSummary {
            window: tail.len(),
            entropy_mean,
            entropy_std_dev,
            slope_mean,
            slope_std_dev,
        })
    }
}

/// Running state of a scaling pass.
///
/// Owns its own frequency table, independent of the final-pass table.
#[derive(Debug)]
pub struct ScalingAnalyzer {
    interval: usize,
    total_files: usize,
    processed: usize,
    table: FrequencyTable,
    snapshots: Vec<ScalingSnapshot>,
}

impl ScalingAnalyzer {
    /// Creates an analyzer for a corpus of `total_files` files.
    pub fn new(interval: usize, total_files: usize) -> Result<Self, AnalysisError> {
        if interval == 0 {
            return Err(AnalysisError::InvalidConfig(
                "checkpoint interval must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            interval,
            total_files,
            processed: 0,
            table: FrequencyTable::new(),
            snapshots: Vec::new(),
        })
    }

    /// Whether a snapshot is recorded after the `index`-th file (1-based).
    pub fn is_checkpoint(&self, index: usize) -> bool {
        index == 1 || index % self.interval == 0 || index == self.total_files
    }

    /// Accumulates the next file's stream; returns the snapshot if this file is a checkpoint.
    pub fn observe(&mut self, stream: &MeasuredStream) -> Option<ScalingSnapshot> {
        self.processed += 1;
        self.table.accumulate(stream.iter());

        if !self.is_checkpoint(self.processed) {
            return None;
        }

        let snapshot = ScalingSnapshot::capture(self.processed, &self.table);
        debug!(
            "Checkpoint at {} files: unique={}, total={}, entropy={:.4}, slope={:.4}",
            snapshot.files_cumulative,
            snapshot.unique_chars,
            snapshot.total_chars,
            snapshot.entropy_bits,
            snapshot.zipf_slope
        );
        self.snapshots.push(snapshot);
        Some(snapshot)
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    /// The running table accumulated so far.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn finish(self) -> ScalingSeries {
        ScalingSeries { snapshots: self.snapshots }
    }

    /// Runs a complete scaling pass over `corpus`.
    pub fn run(
        corpus: &Corpus,
        interval: usize,
        progress: &mut dyn ProgressObserver,
    ) -> Result<ScalingSeries, AnalysisError> {
        let mut analyzer = Self::new(interval, corpus.len())?;
        progress.phase_started(Phase::Scaling, corpus.len());

        for (idx, file) in corpus.iter().enumerate() {
            let stream = extract_measured(&read_cleaned(&file.path));
            analyzer.observe(&stream);
            progress.file_processed(Phase::Scaling, idx + 1, &file.path);
        }

        progress.phase_finished(Phase::Scaling);
        let series = analyzer.finish();
        info!("Scaling analysis recorded {} snapshots.", series.len());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoints(interval: usize, total: usize) -> Vec<usize> {
        let mut analyzer = ScalingAnalyzer::new(interval, total).unwrap();
        let stream = extract_measured("汉");
        (0..total).filter_map(|_| analyzer.observe(&stream)).map(|s| s.files_cumulative).collect()
    }

    #[test]
    fn test_checkpoints_include_first_and_last() {
        assert_eq!(checkpoints(10, 25), vec![1, 10, 20, 25]);
        assert_eq!(checkpoints(10, 20), vec![1, 10, 20]);
        assert_eq!(checkpoints(10, 1), vec![1]);
        assert_eq!(checkpoints(1, 3), vec![1, 2, 3]);
        assert_eq!(checkpoints(4, 5), vec![1, 4, 5]);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(matches!(
            ScalingAnalyzer::new(0, 5),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_counts_are_non_decreasing() {
        let texts = ["天地", "", "玄黄宇宙", "洪荒", "", "日月盈昃", "天天天"];
        let mut analyzer = ScalingAnalyzer::new(2, texts.len()).unwrap();
        for text in texts {
            analyzer.observe(&extract_measured(text));
        }
        let series = analyzer.finish();

        assert_eq!(series.iter().map(|s| s.files_cumulative).collect::<Vec<_>>(), vec![1, 2, 4, 6, 7]);
        for pair in series.snapshots.windows(2) {
            assert!(pair[0].unique_chars <= pair[1].unique_chars);
            assert!(pair[0].total_chars <= pair[1].total_chars);
        }
        assert_eq!(series.last().map(|s| s.total_chars), Some(15));
    }

    #[test]
    fn test_single_file_snapshot_is_neutral_fit() {
        let mut analyzer = ScalingAnalyzer::new(10, 1).unwrap();
        let snapshot = analyzer.observe(&extract_measured("好")).unwrap();
        assert_eq!(snapshot.entropy_bits, 0.0);
        assert_eq!(snapshot.zipf_slope, 0.0);
        assert_eq!(snapshot.zipf_r2, 0.0);
    }

    #[test]
    fn test_convergence_uses_trailing_window() {
        let series = ScalingSeries {
            snapshots: [1.0, 5.0, 5.0]
                .iter()
                .enumerate()
                .map(|(i, &h)| ScalingSnapshot {
                    files_cumulative: i + 1,
                    unique_chars: 1,
                    total_chars: 1,
                    entropy_bits: h,
                    zipf_slope: -1.0,
                    zipf_r2: 1.0,
                })
                .collect(),
        };

        let summary = series.convergence(2).unwrap();
        assert_eq!(summary.window, 2);
        assert_eq!(summary.entropy_mean, 5.0);
        assert_eq!(summary.entropy_std_dev, 0.0);
        assert_eq!(summary.slope_mean, -1.0);

        assert_eq!(series.convergence(10).unwrap().window, 3);
        assert!(series.convergence(0).is_none());
        assert!(ScalingSeries::default().convergence(3).is_none());
    }
}
