use tracing::debug;

use crate::{MomentAccumulator, StatsError};

/// Fewest samples for which the slope denominator is nonzero
pub const MIN_REGRESSION_SAMPLES: usize = 2;

/// Best-fit line y = slope * x + intercept
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Value of the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Sum of squared residuals of `data` against this line, with x taken
    /// as the sample index.
    pub fn sum_squared_residuals(&self, data: &[f64]) -> f64 {
        data.iter()
            .enumerate()
            .map(|(i, &y)| {
                let r = y - self.predict(i as f64);
                r * r
            })
            .sum()
    }
}

// ============================================================================
// Ordinary least squares against the sample index
// ============================================================================

/// Fit the least-squares line through `(i, data[i])`.
///
/// # Arguments
/// * `data` - Sample values; the x coordinate of each is its zero-based index
///
/// # Returns
/// The fitted line, or `StatsError::InsufficientData` when fewer than two
/// samples are given (the slope denominator would be zero).
pub fn linear_regression(data: &[f64]) -> Result<RegressionLine, StatsError> {
    linear_regression_from_moments(&MomentAccumulator::from_samples(data))
}

/// Same as [`linear_regression`], starting from already accumulated sums.
pub fn linear_regression_from_moments(
    moments: &MomentAccumulator,
) -> Result<RegressionLine, StatsError> {
    let insufficient = StatsError::InsufficientData {
        needed: MIN_REGRESSION_SAMPLES,
        got: moments.len(),
    };

    if moments.len() < MIN_REGRESSION_SAMPLES {
        return Err(insufficient);
    }

    let denom = moments.sxx();
    if !(denom > 0.0 && denom.is_finite()) {
        return Err(insufficient);
    }

    let slope = moments.sxy() / denom;
    let intercept = (moments.sum_y() - slope * moments.sum_x()) / moments.n();

    debug!(n = moments.len(), slope, intercept, "fitted regression line");

    Ok(RegressionLine { slope, intercept })
}
