//! Chromaticity coordinates and CIE 1931 / CIE 1976 conversion.
//!
//! A [`Chromaticity`] is a plain pair of reals. The same type carries CIE 1931
//! (x, y) and CIE 1976 UCS (u', v') values; which one a value holds is up to
//! the caller.
//!
//! # Formulas
//!
//! ```text
//! xy -> u'v':  u' = 4x / (-2x + 12y + 3)
//!              v' = 9y / (-2x + 12y + 3)
//!
//! u'v' -> xy:  x  = 9u' / (6u' - 16v' + 12)
//!              y  = 9v' / (6v' - 16v' + 12)     (to_xy, published form)
//!              y  = 4v' / (6u' - 16v' + 12)     (to_xy_exact)
//! ```
//!
//! [`Chromaticity::to_xy`] keeps the published reference formula for y so
//! its output matches existing tables. It is not the inverse of
//! [`Chromaticity::to_upvp`]; use [`Chromaticity::to_xy_exact`] when a
//! round trip is required.

/// A two dimensional chromaticity coordinate.
///
/// Holds either CIE 1931 (x, y) or CIE 1976 (u', v'). Components are not
/// range checked; computed values may fall outside the spectral locus.
///
/// # Example
///
/// ```rust
/// use specrend_core::Chromaticity;
///
/// let d65 = Chromaticity::new(0.3127, 0.3291);
/// assert!((d65.z() - 0.3582).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chromaticity {
    /// x (or u') coordinate
    pub x: f64,
    /// y (or v') coordinate
    pub y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity from its two coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Derived z coordinate, `1 - (x + y)`.
    #[inline]
    pub fn z(self) -> f64 {
        1.0 - (self.x + self.y)
    }

    /// Converts to a tuple `(x, y)`.
    #[inline]
    pub const fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Determines CIE 1931 (x, y) from CIE 1976 (u', v').
    ///
    /// Reproduces the published reference formula, including its y term,
    /// so results agree with tables produced by that formula. Division by a
    /// zero denominator yields infinity or NaN.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specrend_core::Chromaticity;
    ///
    /// let xy = Chromaticity::new(0.2, 0.45).to_xy();
    /// assert!((xy.x - 0.3).abs() < 1e-12);
    /// assert!((xy.y - 0.54).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to_xy(self) -> Self {
        let (u, v) = (self.x, self.y);
        Self::new(
            (9.0 * u) / ((6.0 * u) - (16.0 * v) + 12.0),
            (9.0 * v) / ((6.0 * v) - (16.0 * v) + 12.0),
        )
    }

    /// Determines CIE 1931 (x, y) from CIE 1976 (u', v') using the exact
    /// inverse of [`to_upvp`](Self::to_upvp).
    ///
    /// # Example
    ///
    /// ```rust
    /// use specrend_core::Chromaticity;
    ///
    /// let xy = Chromaticity::new(0.3, 0.3);
    /// let back = xy.to_upvp().to_xy_exact();
    /// assert!((back.x - 0.3).abs() < 1e-12);
    /// assert!((back.y - 0.3).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to_xy_exact(self) -> Self {
        let (u, v) = (self.x, self.y);
        let d = (6.0 * u) - (16.0 * v) + 12.0;
        Self::new((9.0 * u) / d, (4.0 * v) / d)
    }

    /// Determines CIE 1976 (u', v') from CIE 1931 (x, y).
    #[inline]
    pub fn to_upvp(self) -> Self {
        let (x, y) = (self.x, self.y);
        let d = (-2.0 * x) + (12.0 * y) + 3.0;
        Self::new((4.0 * x) / d, (9.0 * y) / d)
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Chromaticity {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Chromaticity> for (f64, f64) {
    #[inline]
    fn from(c: Chromaticity) -> Self {
        c.to_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_upvp_d65() {
        let uv = Chromaticity::new(0.3127, 0.3291).to_upvp();
        assert_abs_diff_eq!(uv.x, 0.19779, epsilon = 1e-5);
        assert_abs_diff_eq!(uv.y, 0.46837, epsilon = 1e-5);
    }

    #[test]
    fn test_to_xy_published_formula() {
        // y uses 9v / (6v - 16v + 12), so it differs from the exact inverse.
        let xy = Chromaticity::new(0.2, 0.45).to_xy();
        assert_abs_diff_eq!(xy.x, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(xy.y, 0.54, epsilon = 1e-12);

        let exact = Chromaticity::new(0.2, 0.45).to_xy_exact();
        assert_eq!(exact.x, xy.x);
        assert_abs_diff_eq!(exact.y, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_roundtrip_exact() {
        for &(u, v) in &[(0.2, 0.45), (0.19779, 0.46837), (0.45, 0.52), (0.17, 0.16)] {
            let uv = Chromaticity::new(u, v);
            let back = uv.to_xy_exact().to_upvp();
            assert_abs_diff_eq!(back.x, u, epsilon = 1e-12);
            assert_abs_diff_eq!(back.y, v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_propagates() {
        // -2x + 12y + 3 == 0
        let uv = Chromaticity::new(1.5, 0.0).to_upvp();
        assert!(uv.x.is_infinite());
        assert!(uv.y.is_nan());
        assert!(!uv.is_finite());
    }

    #[test]
    fn test_z_and_tuple() {
        let c: Chromaticity = (0.25, 0.5).into();
        assert_eq!(c.z(), 0.25);
        let (x, y): (f64, f64) = c.into();
        assert_eq!((x, y), (0.25, 0.5));
    }
}
