//! Gamut test and desaturation.
//!
//! A chromaticity outside the triangle of a display's primaries maps to RGB
//! with at least one negative weight. [`constrain_rgb`] pulls it back onto
//! the triangle edge by mixing in white, which keeps the hue and sacrifices
//! saturation.

use specrend_math::Vec3;

/// True when every weight is non-negative.
///
/// NaN components are not non-negative, so NaN input is out of gamut.
///
/// ```rust
/// use specrend_color::gamut::inside_gamut;
/// use specrend_math::Vec3;
///
/// assert!(inside_gamut(Vec3::new(0.0, 0.5, 1.0)));
/// assert!(!inside_gamut(Vec3::new(-0.01, 0.5, 1.0)));
/// ```
#[inline]
pub fn inside_gamut(rgb: Vec3) -> bool {
    rgb.x >= 0.0 && rgb.y >= 0.0 && rgb.z >= 0.0
}

/// Adds white until no weight is negative.
///
/// The amount is `w = -min(0, r, g, b)`. In-gamut input comes back
/// unchanged, so the operation is idempotent.
///
/// The minimum is taken by comparison, red first: a NaN red leaves `w` NaN
/// and the input is returned as is, while a NaN green or blue is skipped.
///
/// ```rust
/// use specrend_color::gamut::constrain_rgb;
/// use specrend_math::Vec3;
///
/// let rgb = constrain_rgb(Vec3::new(1.2, -0.2, 0.1));
/// assert_eq!(rgb.y, 0.0);
/// assert!((rgb.x - 1.4).abs() < 1e-12);
/// ```
#[inline]
pub fn constrain_rgb(rgb: Vec3) -> Vec3 {
    let mut w = if 0.0 < rgb.x { 0.0 } else { rgb.x };
    if w >= rgb.y {
        w = rgb.y;
    }
    if w >= rgb.z {
        w = rgb.z;
    }
    let w = -w;

    if w > 0.0 {
        Vec3::new(rgb.x + w, rgb.y + w, rgb.z + w)
    } else {
        rgb
    }
}
