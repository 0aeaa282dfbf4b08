// zipfscope-core/src/cleaner.rs
//! Text normalization applied to every input file before measurement.
//!
//! Steps, in order:
//! 1. every line-ending variant becomes `\n`;
//! 2. runs of horizontal whitespace (space, tab, no-break space, ideographic
//!    space) collapse into a single ASCII space;
//! 3. control characters other than `\n` are dropped;
//! 4. the Unicode replacement character is dropped.
//!
//! Decoding is lossy: malformed UTF-8 becomes U+FFFD and step 4 removes it,
//! so a damaged file never aborts a batch.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static HORIZONTAL_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[ \t\u{00A0}\u{3000}]+").expect("horizontal whitespace pattern is valid")
});

/// Decodes bytes as UTF-8, replacing undecodable sequences instead of failing.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Normalizes decoded text into its canonical form.
pub fn clean_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = HORIZONTAL_WHITESPACE.replace_all(&unified, " ");

    collapsed
        .chars()
        .filter(|&ch| ch == '\n' || !ch.is_control())
        .filter(|&ch| ch != char::REPLACEMENT_CHARACTER)
        .collect()
}

/// Reads, decodes and cleans one file.
///
/// A file that cannot be read is logged and treated as empty.
pub fn read_cleaned(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => clean_text(&decode_lossy(&bytes)),
        Err(e) => {
            warn!("Failed to read {}: {}. Treating it as empty.", path.display(), e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unifies_line_endings() {
        assert_eq!(clean_text("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(clean_text("x \t\u{3000}y"), "x y");
        assert_eq!(clean_text("人民\u{00A0}\u{00A0}日报"), "人民 日报");
        assert_eq!(clean_text("一\u{3000}\u{3000}二"), "一 二");
    }

    #[test]
    fn test_keeps_newlines_but_drops_other_controls() {
        assert_eq!(clean_text("上\u{0007}\n下\u{007F}\u{0085}"), "上\n下");
    }

    #[test]
    fn test_drops_replacement_character() {
        assert_eq!(clean_text("中\u{FFFD}文"), "中文");
    }

    #[test]
    fn test_lossy_decoding_drops_malformed_bytes() {
        let mut bytes = "汉字".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice("测试".as_bytes());
        assert_eq!(clean_text(&decode_lossy(&bytes)), "汉字测试");
    }

    #[test]
    fn test_unreadable_file_is_empty() {
        let missing = Path::new("definitely/not/a/real/file.txt");
        assert_eq!(read_cleaned(missing), "");
    }

    #[test]
    fn test_newline_runs_are_preserved() {
        assert_eq!(clean_text("段落\r\n\r\n段落"), "段落\n\n段落");
    }
}
