// zipfscope-core/src/plot.rs
//! The optional plotting capability.
//!
//! The core only ever builds the numeric series below and hands them to a
//! [`PlotRenderer`]. Whether a renderer exists is decided at build time by the
//! `plots` feature; without it [`default_renderer`] returns `None` and the
//! report writer skips the plot artifacts while still writing every table.

use std::path::Path;

use zipfscope_stats::zipf::RankedEntry;

use crate::errors::AnalysisError;
use crate::scaling::ScalingSeries;

/// `(rank, frequency)` points for a log-log scatter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankFrequencySeries {
    pub points: Vec<(usize, u64)>,
}

impl RankFrequencySeries {
    pub fn from_ranked(entries: &[RankedEntry]) -> Self {
        Self {
            points: entries.iter().map(|e| (e.rank, e.frequency)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Cumulative file count against entropy and Zipf slope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalingPlotSeries {
    pub files: Vec<usize>,
    pub entropy_bits: Vec<f64>,
    pub zipf_slope: Vec<f64>,
}

impl ScalingPlotSeries {
    pub fn from_series(series: &ScalingSeries) -> Self {
        Self {
            files: series.iter().map(|s| s.files_cumulative).collect(),
            entropy_bits: series.iter().map(|s| s.entropy_bits).collect(),
            zipf_slope: series.iter().map(|s| s.zipf_slope).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A backend able to turn the numeric series into image files.
pub trait PlotRenderer: Send + Sync {
    /// Short backend name used in log messages.
    fn name(&self) -> &str;

    /// File extension of the produced images, without the dot.
    fn extension(&self) -> &str;

    /// Draws rank against frequency on log-log axes.
    fn render_rank_frequency(&self, series: &RankFrequencySeries, path: &Path) -> Result<(), AnalysisError>;

    /// Draws entropy (left axis) and Zipf slope (right axis) against cumulative file count.
    fn render_scaling(&self, series: &ScalingPlotSeries, path: &Path) -> Result<(), AnalysisError>;
}

/// The renderer compiled into this build, if any.
pub fn default_renderer() -> Option<Box<dyn PlotRenderer>> {
    #[cfg(feature = "plots")]
    {
        Some(Box::new(svg::SvgPlotRenderer::default()))
    }
    #[cfg(not(feature = "plots"))]
    {
        None
    }
}

#[cfg(feature = "plots")]
pub use svg::SvgPlotRenderer;

#[cfg(feature = "plots")]
mod svg {
    use std::error::Error;
    use std::ops::Range;
    use std::path::Path;

    use plotters::prelude::*;

    use super::{PlotRenderer, RankFrequencySeries, ScalingPlotSeries};
    use crate::errors::AnalysisError;

    /// Writes SVG images with `plotters`.
    #[derive(Debug, Clone)]
    pub struct SvgPlotRenderer {
        pub size: (u32, u32),
    }

    impl Default for SvgPlotRenderer {
        fn default() -> Self {
            Self { size: (1200, 900) }
        }
    }

    impl PlotRenderer for SvgPlotRenderer {
        fn name(&self) -> &str {
            "svg"
        }

        fn extension(&self) -> &str {
            "svg"
        }

        fn render_rank_frequency(&self, series: &RankFrequencySeries, path: &Path) -> Result<(), AnalysisError> {
            draw_rank_frequency(series, path, self.size).map_err(|e| AnalysisError::Plot(e.to_string()))
        }

        fn render_scaling(&self, series: &ScalingPlotSeries, path: &Path) -> Result<(), AnalysisError> {
            draw_scaling(series, path, self.size).map_err(|e| AnalysisError::Plot(e.to_string()))
        }
    }

    /// Value range with a little headroom; widened when all values coincide.
    fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if !min.is_finite() || !max.is_finite() {
            return -1.0..1.0;
        }
        if (max - min).abs() < 1e-9 {
            return (min - 1.0)..(max + 1.0);
        }
        let pad = (max - min) * 0.05;
        (min - pad)..(max + pad)
    }

    fn draw_rank_frequency(series: &RankFrequencySeries, path: &Path, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
        let max_rank = series.points.iter().map(|p| p.0).max().unwrap_or(1).max(2) as f64;
        let max_freq = series.points.iter().map(|p| p.1).max().unwrap_or(1).max(2) as f64;

        let root = SVGBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Zipf's law (CJK characters)", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((1f64..max_rank * 1.2).log_scale(), (1f64..max_freq * 1.2).log_scale())?;

        chart
            .configure_mesh()
            .x_desc("Rank")
            .y_desc("Frequency")
            .draw()?;

        chart.draw_series(
            series
                .points
                .iter()
                .map(|&(rank, freq)| Circle::new((rank as f64, freq as f64), 2, BLUE.filled())),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_scaling(series: &ScalingPlotSeries, path: &Path, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
        let x_range = padded_range(series.files.iter().map(|&f| f as f64));
        let entropy_range = padded_range(series.entropy_bits.iter().copied());
        let slope_range = padded_range(series.zipf_slope.iter().copied());

        let root = SVGBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Scaling analysis: entropy & Zipf slope", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .right_y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), entropy_range)?
            .set_secondary_coord(x_range, slope_range);

        chart
            .configure_mesh()
            .x_desc("Number of files (cumulative)")
            .y_desc("Entropy (bits)")
            .draw()?;
        chart
            .configure_secondary_axes()
            .y_desc("Zipf slope (log-log)")
            .draw()?;

        let entropy_points: Vec<(f64, f64)> = series
            .files
            .iter()
            .zip(&series.entropy_bits)
            .map(|(&f, &h)| (f as f64, h))
            .collect();
        let slope_points: Vec<(f64, f64)> = series
            .files
            .iter()
            .zip(&series.zipf_slope)
            .map(|(&f, &s)| (f as f64, s))
            .collect();

        chart
            .draw_series(LineSeries::new(entropy_points.iter().copied(), &BLUE))?
            .label("Entropy")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart.draw_series(entropy_points.iter().map(|&p| Circle::new(p, 3, BLUE.filled())))?;

        chart
            .draw_secondary_series(LineSeries::new(slope_points.iter().copied(), &RED))?
            .label("Zipf slope")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
