//! Transfer curve selection from a color system's gamma field.

use crate::{gamma, rec709};
use specrend_core::{Error, Result};

/// Gamma field value that selects the Rec.709 curve instead of a power law.
pub const GAMMA_REC709: f64 = 0.0;

/// The curve a color system applies when gamma correcting.
///
/// # Example
///
/// ```rust
/// use specrend_transfer::{TransferCurve, GAMMA_REC709};
///
/// assert_eq!(TransferCurve::from_gamma(GAMMA_REC709), TransferCurve::Rec709);
/// assert_eq!(TransferCurve::from_gamma(2.2), TransferCurve::Power(2.2));
/// assert_eq!(TransferCurve::Power(2.2).gamma(), 2.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransferCurve {
    /// Rec.709 piecewise curve.
    #[default]
    Rec709,
    /// `c^(1/gamma)` with the given exponent.
    Power(f64),
}

impl TransferCurve {
    /// Interprets a gamma field: zero is Rec.709, anything else a power law.
    #[inline]
    pub fn from_gamma(gamma: f64) -> Self {
        if gamma == GAMMA_REC709 {
            Self::Rec709
        } else {
            Self::Power(gamma)
        }
    }

    /// Like [`from_gamma`](Self::from_gamma) but rejects negative or
    /// non-finite exponents.
    pub fn try_from_gamma(gamma: f64) -> Result<Self> {
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(Error::InvalidGamma(gamma));
        }
        Ok(Self::from_gamma(gamma))
    }

    /// The gamma field value for this curve.
    #[inline]
    pub fn gamma(self) -> f64 {
        match self {
            Self::Rec709 => GAMMA_REC709,
            Self::Power(g) => g,
        }
    }

    /// Applies the curve to one component.
    #[inline]
    pub fn apply(self, c: f64) -> f64 {
        match self {
            Self::Rec709 => rec709::oetf(c),
            Self::Power(g) => gamma::gamma_oetf(c, g),
        }
    }

    /// Applies the curve to each component independently.
    #[inline]
    pub fn apply_rgb(self, rgb: [f64; 3]) -> [f64; 3] {
        [self.apply(rgb[0]), self.apply(rgb[1]), self.apply(rgb[2])]
    }
}

/// Gamma corrects one component for a color system's gamma field.
#[inline]
pub fn gamma_correct(c: f64, gamma: f64) -> f64 {
    TransferCurve::from_gamma(gamma).apply(c)
}

/// Gamma corrects an RGB triplet for a color system's gamma field.
#[inline]
pub fn gamma_correct_rgb(rgb: [f64; 3], gamma: f64) -> [f64; 3] {
    TransferCurve::from_gamma(gamma).apply_rgb(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sentinel_selects_rec709() {
        for &c in &[0.0, 0.01, 0.018, 0.3, 1.0] {
            assert_eq!(gamma_correct(c, GAMMA_REC709), rec709::oetf(c));
        }
    }

    #[test]
    fn test_power_law() {
        assert_eq!(gamma_correct(0.25, 2.0), 0.5);
        assert_abs_diff_eq!(gamma_correct(0.5, 2.2), 0.5_f64.powf(1.0 / 2.2));
    }

    #[test]
    fn test_try_from_gamma() {
        assert_eq!(TransferCurve::try_from_gamma(0.0), Ok(TransferCurve::Rec709));
        assert_eq!(TransferCurve::try_from_gamma(2.4), Ok(TransferCurve::Power(2.4)));
        assert_eq!(TransferCurve::try_from_gamma(-1.0), Err(Error::InvalidGamma(-1.0)));
        assert!(TransferCurve::try_from_gamma(f64::NAN).is_err());
    }

    #[test]
    fn test_rgb_independent() {
        let out = gamma_correct_rgb([0.25, 1.0, 0.0], 2.0);
        assert_eq!(out, [0.5, 1.0, 0.0]);
        let nan = gamma_correct_rgb([-0.25, 0.25, 1.0], 2.0);
        assert!(nan[0].is_nan());
        assert_eq!(nan[1], 0.5);
    }
}
