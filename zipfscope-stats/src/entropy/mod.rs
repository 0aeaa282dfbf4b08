// zipfscope-stats/src/entropy/mod.rs
use alloc::vec::Vec;
use libm::log2;

use crate::frequency::FrequencyTable;

/// Probability of each observed character, `count / total`.
///
/// Entries keep the table's first-occurrence order. The distribution is
/// empty when the table is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityDistribution {
    entries: Vec<(char, f64)>,
}

impl ProbabilityDistribution {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probability of `ch`, 0.0 for characters never observed.
    pub fn probability(&self, ch: char) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map_or(0.0, |&(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all probabilities; 1.0 up to rounding for any non-empty distribution.
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|&(_, p)| p).sum()
    }
}

/// Entropy figures derived from one frequency table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyReport {
    pub total: u64,
    pub unique: usize,
    pub distribution: ProbabilityDistribution,
    /// Shannon entropy in bits per character.
    pub entropy_bits: f64,
}

impl EntropyReport {
    /// Upper bound for this alphabet size, reached by a uniform distribution.
    pub fn max_entropy_bits(&self) -> f64 {
        max_entropy(self.unique)
    }
}

/// Builds the probability distribution of a frequency table.
pub fn probability_distribution(table: &FrequencyTable) -> ProbabilityDistribution {
    let total = table.snapshot_total();
    if total == 0 {
        return ProbabilityDistribution::default();
    }

    let total = total as f64;
    ProbabilityDistribution {
        entries: table
            .iter()
            .map(|(ch, count)| (ch, count as f64 / total))
            .collect(),
    }
}

/// Calculates the Shannon entropy of a frequency table.
/// 
/// Returns the entropy in bits per symbol, 0.0 for an empty table.
pub fn shannon_entropy(table: &FrequencyTable) -> f64 {
    entropy_of(&probability_distribution(table))
}

fn entropy_of(distribution: &ProbabilityDistribution) -> f64 {
    let mut entropy = 0.0;

    for (_, p) in distribution.iter() {
        if p > 0.0 {
            entropy -= p * log2(p);
        }
    }

    entropy
}

/// `log2(unique)`, the entropy of a uniform distribution over `unique` symbols.
pub fn max_entropy(unique: usize) -> f64 {
    if unique <= 1 {
        return 0.0;
    }
    log2(unique as f64)
}

/// Computes total, distribution and entropy in a single pass over the table.
pub fn analyze_entropy(table: &FrequencyTable) -> EntropyReport {
    let distribution = probability_distribution(table);
    let entropy_bits = entropy_of(&distribution);

    EntropyReport {
        total: table.snapshot_total(),
        unique: table.unique(),
        distribution,
        entropy_bits,
    }
}
