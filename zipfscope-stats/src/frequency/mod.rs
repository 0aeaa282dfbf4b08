//! Character frequency accumulation.
//!
//! A [`FrequencyTable`] is a multiset of characters. It only ever grows:
//! characters are added one occurrence at a time or merged in bulk from
//! another table, and counts are never decremented.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Mapping from character to its number of occurrences.
///
/// Besides the counts, the table remembers the order in which each character
/// was first seen. Ranking uses that order to break ties between equal
/// frequencies, so two tables fed the same corpus in the same order always
/// rank identically. Equality only compares the counts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: BTreeMap<char, usize>,
    entries: Vec<(char, u64)>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single occurrence of `ch`.
    pub fn add(&mut self, ch: char) {
        self.add_count(ch, 1);
    }

    /// Records every character produced by `stream`, duplicates included.
    pub fn accumulate<I>(&mut self, stream: I)
    where
        I: IntoIterator<Item = char>,
    {
        for ch in stream {
            self.add(ch);
        }
    }

    /// Adds all counts of `other` into this table (sum per character).
    ///
    /// Characters not yet present are appended in `other`'s first-occurrence order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for &(ch, count) in &other.entries {
            self.add_count(ch, count);
        }
    }

    fn add_count(&mut self, ch: char, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.get(&ch) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(ch, self.entries.len());
                self.entries.push((ch, count));
            }
        }
        self.total += count;
    }

    /// Number of occurrences recorded for `ch` (0 if never seen).
    pub fn count(&self, ch: char) -> u64 {
        self.index.get(&ch).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Sum of all counts.
    pub fn snapshot_total(&self) -> u64 {
        self.total
    }

    /// Number of distinct characters.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates `(character, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.unique() == other.unique()
            && self.entries.iter().all(|&(ch, count)| other.count(ch) == count)
    }
}

impl Eq for FrequencyTable {}

impl Extend<char> for FrequencyTable {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.accumulate(iter);
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = Self::new();
        table.accumulate(iter);
        table
    }
}
