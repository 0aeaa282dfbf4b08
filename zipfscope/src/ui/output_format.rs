// zipfscope/src/ui/output_format.rs
//! Themed, prefix-tagged status messages.
//!
//! Every function takes an explicit `enable_colors` flag; callers decide it
//! from `is_terminal()` on the stream they write to.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color of `entry` to `text` when colors are enabled.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    message: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", styled(tag, entry, theme, enable_colors), message)
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[INFO]", message, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[OK]", message, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[WARN]", message, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_tagged(writer, "[ERROR]", message, ThemeEntry::Error, theme, enable_colors)
}

/// Section title followed by an underline of matching width.
pub fn print_header<W: Write>(writer: &mut W, title: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", styled(title, ThemeEntry::Header, theme, enable_colors))?;
    writeln!(writer, "{}", styled(&"=".repeat(title.chars().count()), ThemeEntry::Header, theme, enable_colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[ERROR] boom\n");
    }

    #[test]
    fn colored_output_wraps_tag() {
        let theme = ThemeStyle::default_theme_map();
        let text = styled("[WARN]", ThemeEntry::Warn, &theme, true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("[WARN]"));
    }
}
