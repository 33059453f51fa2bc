//! Chainable pipeline stages on tristimulus vectors.
//!
//! # Example
//!
//! ```rust
//! use specrend_color::ColorOps;
//! use specrend_color::primaries::SMPTE;
//! use specrend_color::spectral::{bb_spectrum, spectrum_to_xyz};
//!
//! let rgb = spectrum_to_xyz(6500.0, bb_spectrum)
//!     .to_rgb(&SMPTE)
//!     .constrain_rgb()
//!     .normalize_rgb();
//!
//! assert_eq!(format!("{:.3} {:.3} {:.3}", rgb.x, rgb.y, rgb.z), "1.000 0.937 0.988");
//! ```

use crate::{gamut, normalize};
use specrend_core::Chromaticity;
use specrend_math::Vec3;
use specrend_primaries::{ColorSystem, xyz_to_chromaticity};
use specrend_transfer::gamma_correct_rgb;

/// Pipeline stages as methods, so a conversion reads left to right.
pub trait ColorOps: Sized {
    /// XYZ to linear RGB weights of `cs`.
    fn to_rgb(self, cs: &ColorSystem) -> Self;

    /// See [`gamut::inside_gamut`].
    fn inside_gamut(self) -> bool;

    /// See [`gamut::constrain_rgb`].
    fn constrain_rgb(self) -> Self;

    /// See [`normalize::normalize_rgb`].
    fn normalize_rgb(self) -> Self;

    /// Applies the transfer curve selected by `cs.gamma` to each component.
    fn gamma_correct(self, cs: &ColorSystem) -> Self;

    /// Projects XYZ onto the (x, y) plane.
    fn to_chromaticity(self) -> Chromaticity;
}

impl ColorOps for Vec3 {
    #[inline]
    fn to_rgb(self, cs: &ColorSystem) -> Self {
        cs.xyz_to_rgb(self)
    }

    #[inline]
    fn inside_gamut(self) -> bool {
        gamut::inside_gamut(self)
    }

    #[inline]
    fn constrain_rgb(self) -> Self {
        gamut::constrain_rgb(self)
    }

    #[inline]
    fn normalize_rgb(self) -> Self {
        normalize::normalize_rgb(self)
    }

    #[inline]
    fn gamma_correct(self, cs: &ColorSystem) -> Self {
        Vec3::from_array(gamma_correct_rgb(self.to_array(), cs.gamma))
    }

    #[inline]
    fn to_chromaticity(self) -> Chromaticity {
        xyz_to_chromaticity(self)
    }
}

impl ColorOps for [f64; 3] {
    fn to_rgb(self, cs: &ColorSystem) -> Self {
        Vec3::from_array(self).to_rgb(cs).to_array()
    }

    fn inside_gamut(self) -> bool {
        Vec3::from_array(self).inside_gamut()
    }

    fn constrain_rgb(self) -> Self {
        Vec3::from_array(self).constrain_rgb().to_array()
    }

    fn normalize_rgb(self) -> Self {
        Vec3::from_array(self).normalize_rgb().to_array()
    }

    fn gamma_correct(self, cs: &ColorSystem) -> Self {
        gamma_correct_rgb(self, cs.gamma)
    }

    fn to_chromaticity(self) -> Chromaticity {
        Vec3::from_array(self).to_chromaticity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use specrend_primaries::{REC709, SMPTE};
    use specrend_spectral::{bb_spectrum, spectrum_to_xyz};

    #[test]
    fn test_chain_matches_free_functions() {
        let xyz = spectrum_to_xyz(3000.0, bb_spectrum);
        let chained = xyz.to_rgb(&SMPTE).constrain_rgb().normalize_rgb();
        let direct = normalize::normalize_rgb(gamut::constrain_rgb(SMPTE.xyz_to_rgb(xyz)));
        assert_eq!(chained, direct);
    }

    #[test]
    fn test_array_and_vec_agree() {
        let xyz = spectrum_to_xyz(9000.0, bb_spectrum);
        let v = xyz.to_rgb(&REC709).constrain_rgb().normalize_rgb().gamma_correct(&REC709);
        let a = xyz
            .to_array()
            .to_rgb(&REC709)
            .constrain_rgb()
            .normalize_rgb()
            .gamma_correct(&REC709);
        assert_eq!(v.to_array(), a);
    }

    #[test]
    fn test_gamma_on_normalized_white() {
        let rgb = spectrum_to_xyz(6500.0, bb_spectrum)
            .to_rgb(&SMPTE)
            .constrain_rgb()
            .normalize_rgb()
            .gamma_correct(&SMPTE);
        assert_eq!(rgb.x, 1.0);
        assert_abs_diff_eq!(rgb.y, 0.968226, epsilon = 1e-6);
        assert_abs_diff_eq!(rgb.z, 0.994165, epsilon = 1e-6);
    }

    #[test]
    fn test_out_of_gamut_detected() {
        let raw = spectrum_to_xyz(1000.0, bb_spectrum).to_rgb(&SMPTE);
        assert!(!raw.inside_gamut());
        assert!(raw.constrain_rgb().inside_gamut());
    }

    #[test]
    fn test_to_chromaticity() {
        let c = Vec3::new(0.3135, 0.3237, 0.3628).to_chromaticity();
        assert_abs_diff_eq!(c.x, 0.3135, epsilon = 1e-12);
        assert_abs_diff_eq!(c.z(), 0.3628, epsilon = 1e-12);
    }
}
