//! Pure power-law gamma.
//!
//! Nonlinear = linear^(1/gamma). Input is passed to `powf` untouched, so
//! negative values come back as NaN and values above one stay above one.

/// OETF for arbitrary gamma: `l^(1/gamma)`
///
/// # Example
///
/// ```rust
/// use specrend_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    l.powf(1.0 / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_values() {
        assert_abs_diff_eq!(gamma_oetf(0.5, 2.2), 0.72974, epsilon = 1e-5);
        assert_abs_diff_eq!(gamma_oetf(0.5, 2.8), 0.78071, epsilon = 1e-5);
        assert_eq!(gamma_oetf(1.0, 2.2), 1.0);
        assert_eq!(gamma_oetf(0.0, 2.2), 0.0);
    }

    #[test]
    fn test_unit_gamma_is_identity() {
        for &c in &[0.0, 0.25, 0.8, 3.0] {
            assert_eq!(gamma_oetf(c, 1.0), c);
        }
    }

    #[test]
    fn test_no_clamping() {
        assert!(gamma_oetf(-0.1, 2.2).is_nan());
        assert!(gamma_oetf(4.0, 2.0) > 1.0);
    }
}
