// zipfscope-stats/src/lib.rs
//! `no_std` numeric kernel: frequency tables, Shannon entropy, descriptive
//! statistics and log-log rank-frequency fitting.
#![no_std]

extern crate alloc; 

#[cfg(feature = "std")]
extern crate std;

pub mod frequency;
pub mod entropy;
pub mod statistics;
pub mod zipf;

pub use frequency::FrequencyTable;
pub use entropy::{analyze_entropy, EntropyReport, ProbabilityDistribution};
pub use statistics::{compute_stats, linear_regression, LinearFit, SeriesStats};
pub use zipf::{fit_log_log, fit_power_law, rank_frequency, RankedEntry, ZipfFit};
