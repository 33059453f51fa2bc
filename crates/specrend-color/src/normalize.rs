//! Brightness normalization.

use specrend_math::Vec3;

/// Scales RGB so the largest component is 1.
///
/// Input whose maximum is not positive (all zero, all negative) comes back
/// unchanged. Idempotent whenever the maximum is positive.
///
/// A NaN component makes the maximum NaN, so such input is also returned
/// unchanged, unless another component is `+inf`, which always wins.
///
/// ```rust
/// use specrend_color::normalize::normalize_rgb;
/// use specrend_math::Vec3;
///
/// assert_eq!(normalize_rgb(Vec3::new(2.0, 1.0, 0.5)), Vec3::new(1.0, 0.5, 0.25));
/// assert_eq!(normalize_rgb(Vec3::ZERO), Vec3::ZERO);
/// ```
#[inline]
pub fn normalize_rgb(rgb: Vec3) -> Vec3 {
    let greatest = max_propagating(rgb.x, max_propagating(rgb.y, rgb.z));
    if greatest > 0.0 {
        Vec3::new(rgb.x / greatest, rgb.y / greatest, rgb.z / greatest)
    } else {
        rgb
    }
}

/// Maximum where `+inf` dominates and otherwise NaN propagates.
#[inline]
fn max_propagating(a: f64, b: f64) -> f64 {
    if a == f64::INFINITY || b == f64::INFINITY {
        f64::INFINITY
    } else if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_up_and_down() {
        assert_eq!(normalize_rgb(Vec3::new(0.5, 0.25, 0.0)), Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(normalize_rgb(Vec3::new(4.0, 2.0, 1.0)), Vec3::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_non_positive_max_unchanged() {
        let rgb = Vec3::new(-1.0, -0.5, -2.0);
        assert_eq!(normalize_rgb(rgb), rgb);
    }

    #[test]
    fn test_nan_returns_input() {
        for rgb in [
            Vec3::new(f64::NAN, 2.0, 1.0),
            Vec3::new(2.0, 1.0, f64::NAN),
        ] {
            let out = normalize_rgb(rgb);
            assert_eq!(out.to_array().map(f64::to_bits), rgb.to_array().map(f64::to_bits));
        }
    }

    #[test]
    fn test_infinity_dominates_nan() {
        let out = normalize_rgb(Vec3::new(f64::NAN, f64::INFINITY, 1.0));
        assert!(out.x.is_nan() && out.y.is_nan());
        assert_eq!(out.z, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_rgb(Vec3::new(0.3, 0.7, 0.1));
        assert_eq!(normalize_rgb(once), once);
        assert_eq!(once.y, 1.0);
    }
}
