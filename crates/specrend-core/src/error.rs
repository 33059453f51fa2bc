//! Error types for the checked conversion layer.
//!
//! The numeric core never fails: degenerate input flows through the
//! arithmetic as NaN or infinity. Callers who prefer explicit rejection use
//! the `try_*` and `validate` entry points, which report one of the
//! variants below.
//!
//! # Usage
//!
//! ```rust
//! use specrend_core::{Error, Result};
//!
//! fn check_temperature(kelvin: f64) -> Result<f64> {
//!     if !(kelvin.is_finite() && kelvin > 0.0) {
//!         return Err(Error::InvalidTemperature(kelvin));
//!     }
//!     Ok(kelvin)
//! }
//!
//! assert!(check_temperature(6500.0).is_ok());
//! assert!(check_temperature(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the validating entry points.
///
/// # Categories
///
/// - **Spectral input**: [`InvalidTemperature`](Error::InvalidTemperature),
///   [`InvalidWavelength`](Error::InvalidWavelength), [`ZeroSpectrum`](Error::ZeroSpectrum)
/// - **Color system definition**: [`DegenerateWhitePoint`](Error::DegenerateWhitePoint),
///   [`CollinearPrimaries`](Error::CollinearPrimaries), [`InvalidGamma`](Error::InvalidGamma)
/// - **Lookup**: [`UnknownColorSystem`](Error::UnknownColorSystem)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Temperature is not a finite value above absolute zero.
    ///
    /// ```rust
    /// use specrend_core::Error;
    ///
    /// let err = Error::InvalidTemperature(-5.0);
    /// assert!(err.to_string().contains("-5"));
    /// ```
    #[error("invalid temperature {0} K: must be finite and greater than zero")]
    InvalidTemperature(f64),

    /// Wavelength is not a finite positive number of nanometres.
    #[error("invalid wavelength {0} nm: must be finite and greater than zero")]
    InvalidWavelength(f64),

    /// The integrated spectrum has no usable energy.
    ///
    /// Returned when X + Y + Z is zero or not finite, so the tristimulus
    /// values cannot be normalized.
    #[error("spectrum integrates to {sum}: cannot normalize tristimulus values")]
    ZeroSpectrum {
        /// The X + Y + Z sum that was found.
        sum: f64,
    },

    /// White point luminance (y) is zero, so white cannot be scaled to unity.
    #[error("color system '{system}' has a white point with y = 0")]
    DegenerateWhitePoint {
        /// Color system name
        system: String,
    },

    /// The three primaries lie on one line in chromaticity space.
    #[error("color system '{system}' has collinear primaries (determinant {determinant})")]
    CollinearPrimaries {
        /// Color system name
        system: String,
        /// Determinant of the primaries' xyz matrix
        determinant: f64,
    },

    /// Gamma is negative or not finite.
    ///
    /// Zero is allowed: it selects the Rec.709 curve.
    #[error("invalid gamma {0}: must be zero (Rec.709) or a positive exponent")]
    InvalidGamma(f64),

    /// No standard color system goes by this name.
    #[error("unknown color system '{0}'")]
    UnknownColorSystem(String),
}
