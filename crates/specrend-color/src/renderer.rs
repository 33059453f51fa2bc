//! Spectrum to display RGB in one call.
//!
//! A [`Renderer`] fixes a color system, precomputes its XYZ to RGB matrix,
//! and runs the stages in order:
//!
//! 1. Spectral integration (normalized XYZ)
//! 2. XYZ to linear RGB
//! 3. Gamut constraint (desaturate by adding white)
//! 4. Normalization (largest component becomes 1)
//! 5. Gamma correction
//!
//! Stages 3 to 5 can be switched off individually. By default 3 and 4 run
//! and 5 does not.
//!
//! # Example
//!
//! ```rust
//! use specrend_color::Renderer;
//! use specrend_color::primaries::SMPTE;
//!
//! let renderer = Renderer::new(SMPTE);
//! let out = renderer.render_blackbody(1000.0);
//!
//! assert!(out.approximated);
//! assert_eq!(format!("{:.3}", out.rgb.y), "0.007");
//! ```

use crate::convert::ColorOps;
use specrend_core::Result;
use specrend_math::{Mat3, Vec3};
use specrend_primaries::ColorSystem;
use specrend_spectral::{Blackbody, bb_spectrum, spectrum_to_xyz};
use tracing::{debug, trace};

/// Every intermediate of one rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rendering {
    /// Normalized XYZ, X + Y + Z = 1.
    pub xyz: Vec3,
    /// Linear RGB straight from the matrix, possibly negative.
    pub raw_rgb: Vec3,
    /// RGB after the enabled stages.
    pub rgb: Vec3,
    /// True when `raw_rgb` was outside the gamut of the color system.
    pub approximated: bool,
}

/// A configured spectrum to RGB pipeline for one color system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    system: ColorSystem,
    matrix: Mat3,
    constrain: bool,
    normalize: bool,
    gamma: bool,
}

impl Renderer {
    /// Creates a renderer without validating the color system.
    ///
    /// A degenerate system produces NaN output rather than an error.
    pub fn new(system: ColorSystem) -> Self {
        let matrix = system.xyz_to_rgb_matrix();
        debug!(system = system.name, gamma = system.gamma, "Created renderer");
        Self {
            system,
            matrix,
            constrain: true,
            normalize: true,
            gamma: false,
        }
    }

    /// Creates a renderer after [`ColorSystem::validate`].
    ///
    /// # Errors
    ///
    /// Any error from [`ColorSystem::validate`].
    pub fn try_new(system: ColorSystem) -> Result<Self> {
        system.validate()?;
        Ok(Self::new(system))
    }

    /// Enables or disables the gamut constraint stage.
    pub fn constrain(mut self, enabled: bool) -> Self {
        self.constrain = enabled;
        self
    }

    /// Enables or disables the normalization stage.
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.normalize = enabled;
        self
    }

    /// Enables or disables gamma correction with the system's curve.
    pub fn gamma_correct(mut self, enabled: bool) -> Self {
        self.gamma = enabled;
        self
    }

    /// The color system.
    #[inline]
    pub fn system(&self) -> &ColorSystem {
        &self.system
    }

    /// The precomputed XYZ to RGB matrix.
    #[inline]
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Runs stages 2 to 5 on an already integrated XYZ value.
    pub fn render_xyz(&self, xyz: Vec3) -> Rendering {
        let raw_rgb = self.matrix * xyz;
        let approximated = !raw_rgb.inside_gamut();

        let mut rgb = raw_rgb;
        if self.constrain {
            rgb = rgb.constrain_rgb();
        }
        if self.normalize {
            rgb = rgb.normalize_rgb();
        }
        if self.gamma {
            rgb = rgb.gamma_correct(&self.system);
        }

        Rendering {
            xyz,
            raw_rgb,
            rgb,
            approximated,
        }
    }

    /// Integrates `emit` and renders the result.
    pub fn render_spectrum<F>(&self, temperature: f64, emit: F) -> Rendering
    where
        F: Fn(f64, f64) -> f64,
    {
        let out = self.render_xyz(spectrum_to_xyz(temperature, emit));
        trace!(
            temperature,
            r = out.rgb.x,
            g = out.rgb.y,
            b = out.rgb.z,
            approximated = out.approximated,
            "render_spectrum"
        );
        out
    }

    /// Renders a blackbody at `temperature` Kelvin. Unvalidated.
    pub fn render_blackbody(&self, temperature: f64) -> Rendering {
        self.render_spectrum(temperature, bb_spectrum)
    }

    /// Renders a blackbody after validating its temperature.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTemperature`](specrend_core::Error::InvalidTemperature)
    /// - [`Error::ZeroSpectrum`](specrend_core::Error::ZeroSpectrum) when the
    ///   radiator is too cold to emit in the visible band
    pub fn try_render_blackbody(&self, temperature: f64) -> Result<Rendering> {
        let xyz = Blackbody::new(temperature)?.try_xyz()?;
        Ok(self.render_xyz(xyz))
    }
}
