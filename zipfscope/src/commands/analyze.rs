// zipfscope/src/commands/analyze.rs
//! The `analyze` command: runs the full pipeline and presents the results.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use zipfscope_core::{run_pipeline, AnalysisConfig, PipelineReport};

use crate::commands::{success_msg, warn_msg};
use crate::ui::progress::ProgressDisplay;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Presentation switches for a single `analyze` run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    pub json: bool,
    pub quiet: bool,
    pub show_progress: bool,
}

pub fn run_analyze(config: &AnalysisConfig, opts: AnalyzeOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting analysis of {}", config.corpus_root.display());

    let mut progress = ProgressDisplay::new(opts.show_progress && !opts.quiet && io::stderr().is_terminal());
    let report = run_pipeline(config, &mut progress).context("Analysis failed")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opts.json {
        serde_json::to_writer_pretty(&mut writer, &report.summary).context("Failed to print JSON summary")?;
        writeln!(writer)?;
    } else if !opts.quiet {
        print_report(&mut writer, &report, config.top_n, theme_map, stdout.is_terminal())?;
    }

    report_failures(&report, theme_map);
    if !opts.quiet && !report.outcome.has_failures() {
        success_msg(
            format!("Analysis complete; reports written to {}", config.output_dir.display()),
            theme_map,
        );
    }
    Ok(())
}

fn print_report<W: Write>(
    writer: &mut W,
    report: &PipelineReport,
    top_n: usize,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    summary::print_headline(writer, &report.summary, theme_map, enable_colors)?;
    summary::print_top_characters(writer, &report.run.analysis, top_n, theme_map, enable_colors)?;
    summary::print_scaling_table(writer, &report.run.scaling, theme_map, enable_colors)?;
    summary::print_artifacts(writer, &report.outcome, theme_map, enable_colors)?;
    Ok(())
}

/// Failed artifacts do not fail the run; they are listed as warnings.
fn report_failures(report: &PipelineReport, theme_map: &ThemeMap) {
    for record in report.outcome.failures() {
        warn_msg(format!("Could not write {}", record.artifact.label()), theme_map);
    }
}
