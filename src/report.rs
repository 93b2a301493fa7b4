use std::fmt;

use stats::{
    MomentAccumulator, RegressionLine, StatsError, linear_regression_from_moments,
    pearson_from_moments,
};

/// Trend statistics for one sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub line: RegressionLine,
    pub correlation: f64,
}

impl Report {
    /// Compute both statistics from a single pass over `samples`
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatsError> {
        let moments = MomentAccumulator::from_samples(samples);
        Ok(Self {
            line: linear_regression_from_moments(&moments)?,
            correlation: pearson_from_moments(&moments),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Linear Regression Line: y = {:.6}x + {:.6}",
            self.line.slope, self.line.intercept
        )?;
        write!(f, "Pearson Correlation Coefficient: {:.10}", self.correlation)
    }
}
