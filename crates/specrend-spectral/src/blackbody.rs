//! Planck's law emission for an ideal thermal radiator.
//!
//! [`bb_spectrum`] has the emitter signature expected by
//! [`spectrum_to_xyz`](crate::spectrum_to_xyz) and is unguarded.
//! [`Blackbody`] wraps a validated temperature for callers that want errors
//! instead of NaN.

use crate::integrate::{spectrum_to_xyz, try_spectrum_to_xyz};
use specrend_core::{Error, Result};
use specrend_math::Vec3;

/// First radiation constant, 2 pi h c^2 (W m^2).
pub const C1: f64 = 3.74183e-16;

/// Second radiation constant, h c / k (m K).
pub const C2: f64 = 1.4388e-2;

/// Spectral emittance of a blackbody at `temperature` Kelvin.
///
/// `wavelength` is in nanometres. Temperature and wavelength must be
/// positive; nothing is checked.
///
/// ```rust
/// use specrend_spectral::bb_spectrum;
///
/// // Wien's law: a 5000 K body peaks near 580 nm.
/// assert!(bb_spectrum(5000.0, 580.0) > bb_spectrum(5000.0, 400.0));
/// assert!(bb_spectrum(5000.0, 580.0) > bb_spectrum(5000.0, 780.0));
/// ```
#[inline]
pub fn bb_spectrum(temperature: f64, wavelength: f64) -> f64 {
    let wlm = wavelength * 1e-9;
    C1 * wlm.powf(-5.0) / ((C2 / (wlm * temperature)).exp() - 1.0)
}

/// A blackbody radiator at a validated temperature.
///
/// # Example
///
/// ```rust
/// use specrend_spectral::Blackbody;
///
/// let sun = Blackbody::new(5778.0)?;
/// let xyz = sun.xyz();
/// assert!((xyz.sum() - 1.0).abs() < 1e-9);
/// assert!(Blackbody::new(-1.0).is_err());
/// # Ok::<(), specrend_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blackbody {
    kelvin: f64,
}

impl Blackbody {
    /// Creates a radiator, rejecting non-finite or non-positive temperatures.
    pub fn new(kelvin: f64) -> Result<Self> {
        if !kelvin.is_finite() || kelvin <= 0.0 {
            return Err(Error::InvalidTemperature(kelvin));
        }
        Ok(Self { kelvin })
    }

    /// Temperature in Kelvin.
    #[inline]
    pub fn kelvin(&self) -> f64 {
        self.kelvin
    }

    /// Emittance at `wavelength` nm. Non-positive wavelengths give NaN or
    /// infinity; see [`try_emittance`](Self::try_emittance).
    #[inline]
    pub fn emittance(&self, wavelength: f64) -> f64 {
        bb_spectrum(self.kelvin, wavelength)
    }

    /// Emittance at `wavelength` nm.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWavelength`] if the wavelength is not finite and
    /// positive.
    pub fn try_emittance(&self, wavelength: f64) -> Result<f64> {
        if !wavelength.is_finite() || wavelength <= 0.0 {
            return Err(Error::InvalidWavelength(wavelength));
        }
        Ok(self.emittance(wavelength))
    }

    /// Normalized XYZ of this radiator.
    pub fn xyz(&self) -> Vec3 {
        spectrum_to_xyz(self.kelvin, bb_spectrum)
    }

    /// Normalized XYZ, failing if the visible band carries no energy.
    ///
    /// Very cold radiators underflow to zero at every tabulated wavelength.
    pub fn try_xyz(&self) -> Result<Vec3> {
        try_spectrum_to_xyz(self.kelvin, bb_spectrum)
    }
}

impl TryFrom<f64> for Blackbody {
    type Error = Error;

    fn try_from(kelvin: f64) -> Result<Self> {
        Self::new(kelvin)
    }
}
