// zipfscope/src/ui/summary.rs
//! Console rendering of an analysis run: headline statistics, top characters,
//! the scaling series and the artifact list.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use zipfscope_core::report::{ArtifactStatus, ReportOutcome, RunSummary};
use zipfscope_core::{CorpusAnalysis, ScalingSeries};

use crate::ui::output_format::{print_header, styled};
use crate::ui::theme::{ThemeEntry, ThemeMap};

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn align_numeric_columns(table: &mut Table, columns: &[usize]) {
    for &idx in columns {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Headline numbers of a run as `label: value` lines.
pub fn print_headline<W: Write>(
    writer: &mut W,
    summary: &RunSummary,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_header(writer, "Corpus statistics", theme, enable_colors)?;

    let rows = [
        ("Corpus root", summary.corpus_root.display().to_string()),
        ("Files", summary.files.to_string()),
        ("Fingerprint", summary.fingerprint.clone()),
        ("Total characters", summary.total_chars.to_string()),
        ("Unique characters", summary.unique_chars.to_string()),
        ("Entropy (bits)", format!("{:.4}", summary.entropy_bits)),
        ("Max entropy (bits)", format!("{:.4}", summary.max_entropy_bits)),
        ("Zipf slope", format!("{:.4}", summary.zipf.slope)),
        ("Zipf intercept", format!("{:.4}", summary.zipf.intercept)),
        ("Zipf R²", format!("{:.4}", summary.zipf.r_squared)),
    ];
    for (label, value) in rows {
        writeln!(
            writer,
            "{} {}",
            styled(&format!("{:<20}", format!("{}:", label)), ThemeEntry::SummaryLabel, theme, enable_colors),
            styled(&value, ThemeEntry::SummaryValue, theme, enable_colors)
        )?;
    }

    if let Some(conv) = &summary.convergence {
        writeln!(
            writer,
            "{} entropy {:.4} ± {:.4}, slope {:.4} ± {:.4} over the last {} checkpoints",
            styled(&format!("{:<20}", "Convergence:"), ThemeEntry::SummaryLabel, theme, enable_colors),
            conv.entropy_mean,
            conv.entropy_std_dev,
            conv.slope_mean,
            conv.slope_std_dev,
            conv.window
        )?;
    }
    Ok(())
}

/// The `n` most frequent characters.
pub fn print_top_characters<W: Write>(
    writer: &mut W,
    analysis: &CorpusAnalysis,
    n: usize,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if analysis.is_empty() || n == 0 {
        return Ok(());
    }
    print_header(writer, &format!("Top {} characters", n.min(analysis.unique_chars())), theme, enable_colors)?;

    let total = analysis.total_chars() as f64;
    let mut table = new_table(&["Rank", "Char", "Frequency", "Probability"]);
    for entry in analysis.top(n) {
        table.add_row(vec![
            entry.rank.to_string(),
            entry.character.to_string(),
            entry.frequency.to_string(),
            format!("{:.6}", entry.frequency as f64 / total),
        ]);
    }
    align_numeric_columns(&mut table, &[0, 2, 3]);
    writeln!(writer, "{table}")
}

/// One row per scaling checkpoint.
pub fn print_scaling_table<W: Write>(
    writer: &mut W,
    scaling: &ScalingSeries,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if scaling.is_empty() {
        return Ok(());
    }
    print_header(writer, "Scaling checkpoints", theme, enable_colors)?;

    let mut table = new_table(&["Files", "Unique", "Total", "Entropy (bits)", "Zipf slope", "Zipf R²"]);
    for s in scaling.iter() {
        table.add_row(vec![
            s.files_cumulative.to_string(),
            s.unique_chars.to_string(),
            s.total_chars.to_string(),
            format!("{:.4}", s.entropy_bits),
            format!("{:.4}", s.zipf_slope),
            format!("{:.4}", s.zipf_r2),
        ]);
    }
    align_numeric_columns(&mut table, &[0, 1, 2, 3, 4, 5]);
    writeln!(writer, "{table}")
}

/// Each artifact with its status.
pub fn print_artifacts<W: Write>(
    writer: &mut W,
    outcome: &ReportOutcome,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_header(writer, "Artifacts", theme, enable_colors)?;
    for record in &outcome.artifacts {
        let (tag, entry, detail) = match &record.status {
            ArtifactStatus::Written { path } => ("written", ThemeEntry::ArtifactWritten, path.display().to_string()),
            ArtifactStatus::Skipped { reason } => ("skipped", ThemeEntry::ArtifactSkipped, reason.clone()),
            ArtifactStatus::Failed { message } => ("failed", ThemeEntry::ArtifactFailed, message.clone()),
        };
        writeln!(
            writer,
            "  {} {:<24} {}",
            styled(&format!("{:<8}", tag), entry, theme, enable_colors),
            record.artifact.label(),
            detail
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use zipfscope_core::report::{ArtifactKind, ArtifactRecord};
    use zipfscope_core::stats::FrequencyTable;
    use std::path::PathBuf;

    #[test]
    fn top_table_lists_ranked_characters() {
        let table: FrequencyTable = "的是的啊的".chars().collect();
        let analysis = CorpusAnalysis::from_table(1, table);
        let theme = ThemeStyle::default_theme_map();

        let mut buf = Vec::new();
        print_top_characters(&mut buf, &analysis, 2, &theme, false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Top 2 characters"));
        assert!(out.contains("的"));
        assert!(out.contains("0.600000"));
        assert!(!out.contains("啊"));
    }

    #[test]
    fn artifacts_show_each_status() {
        let outcome = ReportOutcome {
            artifacts: vec![
                ArtifactRecord {
                    artifact: ArtifactKind::Summary,
                    status: ArtifactStatus::Written { path: PathBuf::from("out/summary.json") },
                },
                ArtifactRecord {
                    artifact: ArtifactKind::ZipfPlot,
                    status: ArtifactStatus::Skipped { reason: "plots disabled".into() },
                },
            ],
        };
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_artifacts(&mut buf, &outcome, &theme, false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("written"));
        assert!(out.contains("out/summary.json"));
        assert!(out.contains("skipped"));
        assert!(out.contains("plots disabled"));
    }
}
