// zipfscope/src/ui/progress.rs
//! `indicatif` progress bars driven by pipeline progress events.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use zipfscope_core::{Phase, ProgressObserver};

const BAR_TEMPLATE: &str = "{msg:<18} [{bar:40.cyan/blue}] {pos}/{len} files ({eta})";

/// One bar per phase, drawn on stderr. A disabled display draws nothing.
pub struct ProgressDisplay {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ProgressDisplay {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl ProgressObserver for ProgressDisplay {
    fn phase_started(&mut self, phase: Phase, total_files: usize) {
        debug!("{} started for {} files", phase, total_files);
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::new(total_files as u64);
        bar.set_style(Self::style());
        bar.set_message(phase.label());
        self.bar = Some(bar);
    }

    fn file_processed(&mut self, _phase: Phase, index: usize, _path: &Path) {
        if let Some(bar) = &self.bar {
            bar.set_position(index as u64);
        }
    }

    fn phase_finished(&mut self, phase: Phase) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("{} done", phase.label()));
        }
    }
}
