use alloc::vec::Vec;
use libm::sqrt;

/// Descriptive statistics for a series of measurements (entropy, slope, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeriesStats {
    /// The arithmetic mean of the sampled values.
    pub mean: f64,
    /// The population standard deviation of the sampled values.
    pub std_dev: f64,
}

/// Calculates mean and standard deviation for a slice of values.
///
/// Used to judge how much a statistic still moves over the most recent
/// checkpoints of a growing corpus.
pub fn compute_stats(values: &[f64]) -> SeriesStats {
    if values.is_empty() {
        return SeriesStats { mean: 0.0, std_dev: 0.0 };
    }

    let len = values.len() as f64;
    
    let mean = values.iter().sum::<f64>() / len;

    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    SeriesStats {
        mean,
        std_dev: sqrt(variance),
    }
}

/// Result of an ordinary least-squares fit `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    /// Coefficient of determination in `[0, 1]`.
    pub r_squared: f64,
}

impl LinearFit {
    /// The neutral result returned when no line can be fitted.
    pub const NEUTRAL: LinearFit = LinearFit { intercept: 0.0, slope: 0.0, r_squared: 0.0 };

    pub fn is_degenerate(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Fits `ys` against `xs` by ordinary least squares.
///
/// Returns [`LinearFit::NEUTRAL`] for fewer than two points, slices of
/// different length, or when every `x` is identical. `r_squared` is 0.0 when
/// the `y` values have no variance.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> LinearFit {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return LinearFit::NEUTRAL;
    }

    let len = n as f64;
    let mean_x = xs.iter().sum::<f64>() / len;
    let mean_y = ys.iter().sum::<f64>() / len;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return LinearFit::NEUTRAL;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_squared = if syy > 0.0 { (sxy * sxy) / (sxx * syy) } else { 0.0 };

    LinearFit { intercept, slope, r_squared }
}

/// Convenience wrapper over paired points.
pub fn linear_regression_points(points: &[(f64, f64)]) -> LinearFit {
    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    linear_regression(&xs, &ys)
}
