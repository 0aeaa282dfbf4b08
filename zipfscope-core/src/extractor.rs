// zipfscope-core/src/extractor.rs
//! Restricts cleaned text to the measured alphabet, the CJK Unified
//! Ideographs block (U+4E00..=U+9FFF).

use std::ops::RangeInclusive;

/// Code points counted by the analysis.
pub const MEASURED_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// True if `ch` belongs to the measured alphabet.
pub fn is_measured(ch: char) -> bool {
    MEASURED_RANGE.contains(&ch)
}

/// The measured characters of one text, in source order, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasuredStream(Vec<char>);

impl MeasuredStream {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.0
    }
}

impl From<MeasuredStream> for String {
    fn from(stream: MeasuredStream) -> Self {
        stream.0.into_iter().collect()
    }
}

/// Filters `text` down to its measured characters.
///
/// Text without any measured characters yields an empty stream; that is a
/// valid result, not an error.
pub fn extract_measured(text: &str) -> MeasuredStream {
    MeasuredStream(text.chars().filter(|&ch| is_measured(ch)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(is_measured('\u{4E00}'));
        assert!(is_measured('\u{9FFF}'));
        assert!(!is_measured('\u{4DFF}'));
        assert!(!is_measured('\u{A000}'));
    }

    #[test]
    fn test_extract_preserves_order_and_duplicates() {
        let stream = extract_measured("2025年1月1日，人民日报：日日新！abc");
        assert_eq!(String::from(stream.clone()), "年月日人民日报日日新");
        assert_eq!(stream.len(), 10);
    }

    #[test]
    fn test_extract_skips_punctuation_and_kana() {
        let stream = extract_measured("「ひらがな」、カタカナ。《》");
        assert!(stream.is_empty());
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract_measured("").is_empty());
    }
}
