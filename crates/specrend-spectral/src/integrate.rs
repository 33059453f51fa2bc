//! Integration of an emission function against the CIE matching table.

use crate::cmf::{self, CIE_COLOUR_MATCH};
use specrend_core::{Error, Result};
use specrend_math::Vec3;

/// Integrates `emit` against the color matching functions.
///
/// `emit(temperature, wavelength_nm)` is called once per table row, from
/// 380 nm to 780 nm in 5 nm steps. The accumulated (X, Y, Z) is divided by
/// X + Y + Z, so the result is a chromaticity with its implied z, not an
/// absolute tristimulus value.
///
/// A spectrum with no energy in the visible band gives NaN in every
/// component.
///
/// ```rust
/// use specrend_spectral::spectrum_to_xyz;
///
/// let dark = spectrum_to_xyz(5000.0, |_, _| 0.0);
/// assert!(dark.is_nan());
/// ```
pub fn spectrum_to_xyz<F>(temperature: f64, emit: F) -> Vec3
where
    F: Fn(f64, f64) -> f64,
{
    let raw = accumulate(temperature, emit);
    raw / raw.sum()
}

/// Like [`spectrum_to_xyz`] but rejects spectra that cannot be normalized.
///
/// For spectra that pass, the result is identical to [`spectrum_to_xyz`].
///
/// # Errors
///
/// [`Error::ZeroSpectrum`] when X + Y + Z is zero or not finite.
pub fn try_spectrum_to_xyz<F>(temperature: f64, emit: F) -> Result<Vec3>
where
    F: Fn(f64, f64) -> f64,
{
    let raw = accumulate(temperature, emit);
    let sum = raw.sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(Error::ZeroSpectrum { sum });
    }
    Ok(raw / sum)
}

/// Unnormalized weighted sums over the table, in wavelength order.
fn accumulate<F>(temperature: f64, emit: F) -> Vec3
where
    F: Fn(f64, f64) -> f64,
{
    let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);

    for (i, [xbar, ybar, zbar]) in CIE_COLOUR_MATCH.iter().copied().enumerate() {
        let me = emit(temperature, cmf::wavelength(i));
        x += me * xbar;
        y += me * ybar;
        z += me * zbar;
    }

    Vec3::new(x, y, z)
}
