// zipfscope/src/ui/mod.rs
//! Console presentation: themes, message formatting, summary tables and progress bars.

pub mod output_format;
pub mod progress;
pub mod summary;
pub mod theme;
