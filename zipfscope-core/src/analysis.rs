// zipfscope-core/src/analysis.rs
//! The final pass over the corpus: one cumulative frequency table and the
//! statistics derived from it.

use log::{debug, info};
use serde::Serialize;

use zipfscope_stats::entropy::{analyze_entropy, EntropyReport};
use zipfscope_stats::frequency::FrequencyTable;
use zipfscope_stats::zipf::{fit_log_log, rank_frequency, RankedEntry, ZipfFit};

use crate::cleaner::read_cleaned;
use crate::discovery::Corpus;
use crate::extractor::extract_measured;
use crate::pipeline::{Phase, ProgressObserver};

/// Row of the per-character table: character, frequency, probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharacterRow {
    pub character: char,
    pub frequency: u64,
    pub probability: f64,
}

/// Everything computed from the cumulative-final frequency table.
#[derive(Debug, Clone)]
pub struct CorpusAnalysis {
    /// Number of files read.
    pub files: usize,
    pub table: FrequencyTable,
    pub entropy: EntropyReport,
    /// Characters by descending frequency, ranks `1..=unique`.
    pub rank_frequency: Vec<RankedEntry>,
    pub zipf: ZipfFit,
}

impl CorpusAnalysis {
    /// Derives entropy, ranking and Zipf fit from an accumulated table.
    pub fn from_table(files: usize, table: FrequencyTable) -> Self {
        let entropy = analyze_entropy(&table);
        let rank_frequency = rank_frequency(&table);
        let zipf = fit_log_log(&rank_frequency);

        Self { files, table, entropy, rank_frequency, zipf }
    }

    pub fn total_chars(&self) -> u64 {
        self.entropy.total
    }

    pub fn unique_chars(&self) -> usize {
        self.entropy.unique
    }

    /// True when no measured character was seen at all.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The `n` most frequent characters.
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.rank_frequency[..n.min(self.rank_frequency.len())]
    }

    /// Per-character rows sorted by descending frequency.
    pub fn character_rows(&self) -> impl Iterator<Item = CharacterRow> + '_ {
        let total = self.total_chars() as f64;
        self.rank_frequency.iter().map(move |entry| CharacterRow {
            character: entry.character,
            frequency: entry.frequency,
            probability: entry.frequency as f64 / total,
        })
    }
}

/// Reads every file of the corpus once and accumulates its measured characters.
pub fn analyze_corpus(corpus: &Corpus, progress: &mut dyn ProgressObserver) -> CorpusAnalysis {
    progress.phase_started(Phase::Reading, corpus.len());

    let mut table = FrequencyTable::new();
    for (idx, file) in corpus.iter().enumerate() {
        let stream = extract_measured(&read_cleaned(&file.path));
        debug!("{}: {} measured characters", file.relative_name(), stream.len());
        table.accumulate(stream.iter());
        progress.file_processed(Phase::Reading, idx + 1, &file.path);
    }

    progress.phase_finished(Phase::Reading);

    let analysis = CorpusAnalysis::from_table(corpus.len(), table);
    info!(
        "Measured {} characters ({} unique) across {} files; entropy {:.4} bits.",
        analysis.total_chars(),
        analysis.unique_chars(),
        analysis.files,
        analysis.entropy.entropy_bits
    );
    info!(
        "Zipf fit: ln(freq) = {:.4} + {:.4} * ln(rank), R² = {:.4}",
        analysis.zipf.intercept, analysis.zipf.slope, analysis.zipf.r_squared
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_table_known_scenario() {
        let table: FrequencyTable = "啊的是啊的啊".chars().collect();
        let analysis = CorpusAnalysis::from_table(1, table);

        assert_eq!(analysis.total_chars(), 6);
        assert_eq!(analysis.unique_chars(), 3);
        assert!((analysis.entropy.entropy_bits - 1.4591).abs() < 1e-4);

        let rows: Vec<CharacterRow> = analysis.character_rows().collect();
        assert_eq!(rows[0].character, '啊');
        assert!((rows[0].probability - 0.5).abs() < 1e-12);
        assert_eq!(rows[2].frequency, 1);
    }

    #[test]
    fn test_from_empty_table_is_neutral() {
        let analysis = CorpusAnalysis::from_table(3, FrequencyTable::new());
        assert!(analysis.is_empty());
        assert_eq!(analysis.entropy.entropy_bits, 0.0);
        assert!(analysis.rank_frequency.is_empty());
        assert_eq!(analysis.zipf, ZipfFit::NEUTRAL);
        assert_eq!(analysis.character_rows().count(), 0);
    }

    #[test]
    fn test_top_is_clamped() {
        let table: FrequencyTable = "甲乙".chars().collect();
        let analysis = CorpusAnalysis::from_table(1, table);
        assert_eq!(analysis.top(10).len(), 2);
        assert_eq!(analysis.top(1)[0].character, '甲');
    }
}
