//! Rec.709 (BT.709) gamma correction.
//!
//! Two variants share the power segment above the break point:
//!
//! - [`oetf`] follows the classic spectrum rendering reference, which
//!   returns the linear segment's slope itself for every input below the
//!   break. Tables computed with that reference reproduce exactly.
//! - [`oetf_continuous`] scales the slope by the input, giving the BT.709
//!   straight line through the origin that meets the power segment.
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Break point between the low segment and the power segment.
pub const BREAK: f64 = 0.018;

/// Power segment: `1.099 * c^0.45 - 0.099`.
#[inline]
fn power_segment(c: f64) -> f64 {
    (1.099 * c.powf(0.45)) - 0.099
}

/// Slope of the linear segment, `power_segment(BREAK) / BREAK` (about 4.514).
#[inline]
pub fn linear_slope() -> f64 {
    power_segment(BREAK) / BREAK
}

/// Rec.709 OETF as used by the reference blackbody tables.
///
/// # Formula
///
/// ```text
/// if c < 0.018:
///     V = (1.099 * 0.018^0.45 - 0.099) / 0.018
/// else:
///     V = 1.099 * c^0.45 - 0.099
/// ```
///
/// Every value below the break encodes to the same constant. Use
/// [`oetf_continuous`] for the BT.709 linear segment.
///
/// # Example
///
/// ```rust
/// use specrend_transfer::rec709;
///
/// assert!((rec709::oetf(1.0) - 1.0).abs() < 1e-12);
/// assert_eq!(rec709::oetf(0.0), rec709::linear_slope());
/// ```
#[inline]
pub fn oetf(c: f64) -> f64 {
    if c < BREAK {
        linear_slope()
    } else {
        power_segment(c)
    }
}

/// Rec.709 OETF with the linear segment `c * slope` below the break.
///
/// Continuous and monotonic on `[0, 1]`; identical to [`oetf`] at and
/// above [`BREAK`].
///
/// ```rust
/// use specrend_transfer::rec709;
///
/// assert_eq!(rec709::oetf_continuous(0.0), 0.0);
/// assert_eq!(rec709::oetf_continuous(0.5), rec709::oetf(0.5));
/// ```
#[inline]
pub fn oetf_continuous(c: f64) -> f64 {
    if c < BREAK {
        c * linear_slope()
    } else {
        power_segment(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_low_segment_is_constant() {
        let expected = ((1.099 * 0.018_f64.powf(0.45)) - 0.099) / 0.018;
        for c in [0.0, 0.001, 0.01, 0.0179, -0.5] {
            assert_eq!(oetf(c), expected, "c = {}", c);
        }
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variants_agree_above_break() {
        for c in [0.018, 0.05, 0.18, 0.5, 0.9, 1.0] {
            assert_eq!(oetf(c), oetf_continuous(c));
        }
    }

    #[test]
    fn test_continuous_at_break() {
        assert_eq!(oetf_continuous(0.0), 0.0);
        let below = BREAK * linear_slope();
        assert_abs_diff_eq!(below, oetf_continuous(BREAK), epsilon = 1e-15);
        assert_abs_diff_eq!(oetf_continuous(BREAK - 1e-12), oetf_continuous(BREAK), epsilon = 1e-9);
    }

    #[test]
    fn test_continuous_monotonic() {
        let mut prev = oetf_continuous(0.0);
        for i in 1..=1000 {
            let v = oetf_continuous(i as f64 / 1000.0);
            assert!(v > prev, "not increasing at {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_power_segment_formula() {
        for &c in &[0.018, 0.05, 0.18, 0.5, 0.9] {
            assert_eq!(oetf(c), 1.099 * f64::powf(c, 0.45) - 0.099);
        }
    }
}
