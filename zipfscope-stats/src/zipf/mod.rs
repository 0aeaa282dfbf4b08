//! Rank-frequency ordering and power-law (Zipf) fitting.
//!
//! Characters are ranked by descending frequency and a straight line is fitted
//! through `(ln rank, ln frequency)`. For text that follows Zipf's law the
//! slope sits near -1 with an R² close to 1.

use alloc::vec::Vec;
use libm::log;

use crate::frequency::FrequencyTable;
use crate::statistics::{linear_regression, LinearFit};

/// Intercept, slope and R² of the log-log rank-frequency fit.
pub type ZipfFit = LinearFit;

/// One row of the rank-frequency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based position after sorting by descending frequency.
    pub rank: usize,
    pub character: char,
    pub frequency: u64,
}

/// Sorts the table by descending frequency and assigns ranks `1..=N`.
///
/// Equal frequencies keep the table's first-occurrence order.
pub fn rank_frequency(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<(char, u64)> = table.iter().collect();
    // Stable sort, ties stay in first-occurrence order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, (character, frequency))| RankedEntry {
            rank: idx + 1,
            character,
            frequency,
        })
        .collect()
}

/// Fits `ln(frequency)` against `ln(rank)` over entries with positive rank and frequency.
pub fn fit_log_log(entries: &[RankedEntry]) -> ZipfFit {
    let (xs, ys): (Vec<f64>, Vec<f64>) = entries
        .iter()
        .filter(|e| e.rank > 0 && e.frequency > 0)
        .map(|e| (log(e.rank as f64), log(e.frequency as f64)))
        .unzip();

    linear_regression(&xs, &ys)
}

/// Ranks the table and fits it in one call.
pub fn fit_power_law(table: &FrequencyTable) -> ZipfFit {
    fit_log_log(&rank_frequency(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    const EPSILON: f64 = 1e-9;

    /// 720720 is divisible by every integer 1..=16, so `C / rank` stays exact.
    fn perfect_zipf_table(ranks: u32) -> FrequencyTable {
        const C: u64 = 720_720;
        let mut table = FrequencyTable::new();
        for rank in 1..=ranks {
            let ch = char::from_u32(0x4E00 + rank).unwrap();
            for _ in 0..(C / rank as u64) {
                table.add(ch);
            }
        }
        table
    }

    #[test]
    fn test_rank_frequency_known_scenario() {
        let table: FrequencyTable = "的啊是啊的啊".chars().collect();
        let ranked = rank_frequency(&table);
        assert_eq!(
            ranked,
            vec![
                RankedEntry { rank: 1, character: '啊', frequency: 3 },
                RankedEntry { rank: 2, character: '的', frequency: 2 },
                RankedEntry { rank: 3, character: '是', frequency: 1 },
            ]
        );
    }

    #[test]
    fn test_rank_frequency_is_non_increasing() {
        let table: FrequencyTable = "山山水水水花草草草草木".chars().collect();
        let ranked = rank_frequency(&table);
        assert_eq!(ranked.len(), table.unique());
        for pair in ranked.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
            assert_eq!(pair[0].rank + 1, pair[1].rank);
        }
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let table: FrequencyTable = "乙甲丙甲乙丙".chars().collect();
        let order: Vec<char> = rank_frequency(&table).iter().map(|e| e.character).collect();
        assert_eq!(order, vec!['乙', '甲', '丙']);
    }

    #[test]
    fn test_perfect_zipf_recovers_slope() {
        let fit = fit_power_law(&perfect_zipf_table(16));
        assert!((fit.slope + 1.0).abs() < EPSILON, "slope was {}", fit.slope);
        assert!((fit.r_squared - 1.0).abs() < EPSILON, "r2 was {}", fit.r_squared);
        assert!((fit.intercept - log(720_720.0)).abs() < EPSILON);
    }

    #[test]
    fn test_empty_table_gives_neutral_fit() {
        let table = FrequencyTable::new();
        assert!(rank_frequency(&table).is_empty());
        assert_eq!(fit_power_law(&table), ZipfFit::NEUTRAL);
    }

    #[test]
    fn test_single_character_gives_neutral_fit() {
        let table: FrequencyTable = "好好好".chars().collect();
        assert!(fit_power_law(&table).is_degenerate());
    }

    #[test]
    fn test_filters_out_rank_zero_entries() {
        let entries = [
            RankedEntry { rank: 0, character: '零', frequency: 9 },
            RankedEntry { rank: 1, character: '一', frequency: 4 },
            RankedEntry { rank: 2, character: '二', frequency: 2 },
        ];
        let fit = fit_log_log(&entries);
        // Only the two valid points remain: ln4 -> ln2 over ln1 -> ln2.
        assert!((fit.slope + 1.0).abs() < EPSILON);
    }
}
