/// Running sums over a sample sequence, where x is the zero-based
/// position of each sample and y is its value.
///
/// Both the regression line and the correlation coefficient are closed-form
/// expressions of these five sums, so one pass over the data feeds both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MomentAccumulator {
    count: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xy: f64,
    sum_xx: f64,
    sum_yy: f64,
}

impl MomentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate every sample of `data` in order.
    pub fn from_samples(data: &[f64]) -> Self {
        data.iter().copied().collect()
    }

    /// Append one sample at the next index.
    pub fn push(&mut self, y: f64) {
        let x = self.count as f64;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xy += x * y;
        self.sum_xx += x * x;
        self.sum_yy += y * y;
        self.count += 1;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sample count as a float, for use in the moment formulas
    pub fn n(&self) -> f64 {
        self.count as f64
    }

    pub fn sum_x(&self) -> f64 {
        self.sum_x
    }

    pub fn sum_y(&self) -> f64 {
        self.sum_y
    }

    pub fn sum_xy(&self) -> f64 {
        self.sum_xy
    }

    pub fn sum_xx(&self) -> f64 {
        self.sum_xx
    }

    pub fn sum_yy(&self) -> f64 {
        self.sum_yy
    }

    // ------------------------------------------------------------------------
    // Scaled co-moments: n times the centered sums of squares / products
    // ------------------------------------------------------------------------

    /// n·Σxx − (Σx)²
    pub fn sxx(&self) -> f64 {
        self.n() * self.sum_xx - self.sum_x * self.sum_x
    }

    /// n·Σyy − (Σy)²
    pub fn syy(&self) -> f64 {
        self.n() * self.sum_yy - self.sum_y * self.sum_y
    }

    /// n·Σxy − Σx·Σy
    pub fn sxy(&self) -> f64 {
        self.n() * self.sum_xy - self.sum_x * self.sum_y
    }
}

impl FromIterator<f64> for MomentAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        for y in iter {
            acc.push(y);
        }
        acc
    }
}

impl Extend<f64> for MomentAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for y in iter {
            self.push(y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator() {
        let acc = MomentAccumulator::from_samples(&[]);
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
        assert_eq!(acc.sum_x(), 0.0);
        assert_eq!(acc.sxx(), 0.0);
    }

    #[test]
    fn test_sums() {
        let acc = MomentAccumulator::from_samples(&[2.0, 4.0, 7.0]);

        assert_eq!(acc.len(), 3);
        assert_eq!(acc.sum_x(), 3.0); // 0 + 1 + 2
        assert_eq!(acc.sum_y(), 13.0);
        assert_eq!(acc.sum_xy(), 18.0); // 0*2 + 1*4 + 2*7
        assert_eq!(acc.sum_xx(), 5.0);
        assert_eq!(acc.sum_yy(), 69.0);

        assert_eq!(acc.sxx(), 6.0); // 3*5 - 9
        assert_eq!(acc.sxy(), 15.0); // 3*18 - 3*13
        assert_eq!(acc.syy(), 38.0); // 3*69 - 169
    }

    #[test]
    fn test_push_matches_from_samples() {
        let data = [1.5, -0.25, 3.0, 8.0];
        let mut acc = MomentAccumulator::new();
        acc.extend(data.iter().copied());
        assert_eq!(acc, MomentAccumulator::from_samples(&data));
    }

    #[test]
    fn test_sxx_positive_for_two_or_more() {
        for n in 2..50 {
            let data = vec![0.0; n];
            assert!(MomentAccumulator::from_samples(&data).sxx() > 0.0);
        }
    }
}
