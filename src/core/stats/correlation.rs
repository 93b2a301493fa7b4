use tracing::debug;

use crate::MomentAccumulator;

/// Pearson correlation between the sample index and the sample value.
///
/// Returns 0.0 when either variance is zero (a constant sequence, or fewer
/// than two samples). Callers rely on that value, so it is not reported as
/// an error even though r is undefined there.
///
/// A product of variances that rounds below zero takes the same zero path,
/// and the result is clamped to [-1, 1]. For nearly collinear data the
/// clamp can differ from the raw quotient in the last printed digits.
pub fn pearson(data: &[f64]) -> f64 {
    pearson_from_moments(&MomentAccumulator::from_samples(data))
}

/// Same as [`pearson`], starting from already accumulated sums.
pub fn pearson_from_moments(moments: &MomentAccumulator) -> f64 {
    let num = moments.sxy();
    let den = moments.sxx() * moments.syy();

    // Rounding can push the product of two tiny variances below zero
    if den <= 0.0 {
        debug!(n = moments.len(), den, "degenerate variance, correlation set to zero");
        return 0.0;
    }

    (num / den.sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive() {
        let r = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_negative() {
        let r = pearson(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_is_zero() {
        let r = pearson(&[3.0, 3.0, 3.0, 3.0]);
        assert_eq!(r, 0.0);
        assert!(!r.is_nan());
    }

    #[test]
    fn test_short_sequences_are_zero() {
        assert_eq!(pearson(&[]), 0.0);
        assert_eq!(pearson(&[7.5]), 0.0);
    }

    #[test]
    fn test_no_linear_trend() {
        // Symmetric around the middle index
        let r = pearson(&[1.0, 0.0, -1.0, 0.0, 1.0]);
        assert!(r.abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // x = 0..4, y = [2, 1, 4, 3]: sxy = 4*18 - 6*10 = 12, sxx = 20, syy = 4*30 - 100 = 20
        let r = pearson(&[2.0, 1.0, 4.0, 3.0]);
        assert!((r - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_negative_variance_product_is_zero() {
        // 6 * 0.3^2 accumulates to slightly less than (6 * 0.3)^2
        let data = [0.3; 6];
        let acc = MomentAccumulator::from_samples(&data);
        assert!(acc.syy() < 0.0);
        assert!(acc.sxx() * acc.syy() < 0.0);

        assert_eq!(pearson(&data), 0.0);
    }

    #[test]
    fn test_rounding_above_one_is_clamped() {
        let data = [1000.0, 1000.3];
        let acc = MomentAccumulator::from_samples(&data);
        let raw = acc.sxy() / (acc.sxx() * acc.syy()).sqrt();
        assert!(raw > 1.0);

        let r = pearson(&data);
        assert!(r.is_finite());
        assert_eq!(r, 1.0);
    }

    #[test]
    fn test_from_moments_matches_slice() {
        let data = [0.3, 1.7, -2.2, 4.9, 5.5, 5.4];
        let acc = MomentAccumulator::from_samples(&data);
        assert_eq!(pearson(&data), pearson_from_moments(&acc));
    }
}
