//! Color system definitions and the standard set.

use specrend_core::{Chromaticity, Error, Result};
use specrend_math::{Mat3, Vec3};
use specrend_transfer::{GAMMA_REC709, TransferCurve};

/// An additive tricolor display system.
///
/// Defined by the CIE (x, y) chromaticities of its red, green, and blue
/// primaries, its white point, and a gamma value. `gamma == 0.0`
/// ([`GAMMA_REC709`]) selects the Rec.709 curve; any other value is the
/// exponent of a power law.
///
/// # Example
///
/// ```rust
/// use specrend_primaries::{ColorSystem, ILLUMINANT_D65};
/// use specrend_core::Chromaticity;
///
/// let display = ColorSystem {
///     name: "Custom",
///     red: Chromaticity::new(0.64, 0.33),
///     green: Chromaticity::new(0.30, 0.60),
///     blue: Chromaticity::new(0.15, 0.06),
///     white: ILLUMINANT_D65,
///     gamma: 2.2,
/// };
/// assert!(display.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSystem {
    /// Color system name
    pub name: &'static str,
    /// Red primary (x, y) chromaticity
    pub red: Chromaticity,
    /// Green primary (x, y) chromaticity
    pub green: Chromaticity,
    /// Blue primary (x, y) chromaticity
    pub blue: Chromaticity,
    /// White point (x, y) chromaticity
    pub white: Chromaticity,
    /// Gamma exponent, or [`GAMMA_REC709`]
    pub gamma: f64,
}

impl ColorSystem {
    /// Looks up a standard color system by name.
    ///
    /// Case and the characters ` `, `.`, `-`, `_` are ignored, so `"rec709"`,
    /// `"Rec.709"` and `"CIE REC 709"` all resolve to [`REC709`].
    ///
    /// ```rust
    /// use specrend_primaries::{ColorSystem, SMPTE, REC709};
    ///
    /// assert_eq!(ColorSystem::by_name("smpte"), Ok(SMPTE));
    /// assert_eq!(ColorSystem::by_name("Rec.709"), Ok(REC709));
    /// assert!(ColorSystem::by_name("PAL-M").is_err());
    /// ```
    pub fn by_name(name: &str) -> Result<Self> {
        let key = name_key(name);
        STANDARD_SYSTEMS
            .iter()
            .find(|cs| name_key(cs.name) == key || (key == "rec709" && cs.name == REC709.name))
            .copied()
            .ok_or_else(|| Error::UnknownColorSystem(name.to_string()))
    }

    /// Transfer curve selected by the gamma field.
    #[inline]
    pub fn transfer_curve(&self) -> TransferCurve {
        TransferCurve::from_gamma(self.gamma)
    }

    /// Returns a copy with a different gamma value.
    #[inline]
    pub fn with_gamma(self, gamma: f64) -> Self {
        Self { gamma, ..self }
    }

    /// XYZ to RGB matrix, see [`crate::xyz_to_rgb_matrix`].
    #[inline]
    pub fn xyz_to_rgb_matrix(&self) -> Mat3 {
        crate::xyz_to_rgb_matrix(self)
    }

    /// Validated XYZ to RGB matrix, see [`crate::try_xyz_to_rgb_matrix`].
    pub fn try_xyz_to_rgb_matrix(&self) -> Result<Mat3> {
        crate::try_xyz_to_rgb_matrix(self)
    }

    /// RGB to XYZ matrix, see [`crate::rgb_to_xyz_matrix`].
    pub fn rgb_to_xyz_matrix(&self) -> Option<Mat3> {
        crate::rgb_to_xyz_matrix(self)
    }

    /// Primary weights for a chromaticity, see [`crate::xyz_to_rgb`].
    #[inline]
    pub fn xyz_to_rgb(&self, xyz: Vec3) -> Vec3 {
        crate::xyz_to_rgb(self, xyz)
    }

    /// Checks that the system can produce a finite matrix.
    ///
    /// # Errors
    ///
    /// - [`Error::DegenerateWhitePoint`] if the white point has y = 0
    /// - [`Error::CollinearPrimaries`] if the primaries span no triangle
    /// - [`Error::InvalidGamma`] if gamma is negative or not finite
    pub fn validate(&self) -> Result<()> {
        crate::check(self)
    }
}

fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Standard White Points
// ============================================================================

/// Illuminant C white point chromaticity (average daylight, NTSC).
pub const ILLUMINANT_C: Chromaticity = Chromaticity::new(0.3101, 0.3162);

/// D65 white point chromaticity (daylight, ~6500K).
pub const ILLUMINANT_D65: Chromaticity = Chromaticity::new(0.3127, 0.3291);

/// Equal-energy illuminant E.
pub const ILLUMINANT_E: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

// ============================================================================
// Standard Color Systems
// ============================================================================

/// NTSC (1953 FCC primaries, illuminant C).
pub const NTSC: ColorSystem = ColorSystem {
    name: "NTSC",
    red: Chromaticity::new(0.67, 0.33),
    green: Chromaticity::new(0.21, 0.71),
    blue: Chromaticity::new(0.14, 0.08),
    white: ILLUMINANT_C,
    gamma: GAMMA_REC709,
};

/// EBU (PAL/SECAM).
pub const EBU: ColorSystem = ColorSystem {
    name: "EBU",
    red: Chromaticity::new(0.64, 0.33),
    green: Chromaticity::new(0.29, 0.60),
    blue: Chromaticity::new(0.15, 0.06),
    white: ILLUMINANT_D65,
    gamma: GAMMA_REC709,
};

/// SMPTE C.
pub const SMPTE: ColorSystem = ColorSystem {
    name: "SMPTE",
    red: Chromaticity::new(0.630, 0.340),
    green: Chromaticity::new(0.310, 0.595),
    blue: Chromaticity::new(0.155, 0.070),
    white: ILLUMINANT_D65,
    gamma: GAMMA_REC709,
};

/// HDTV.
pub const HDTV: ColorSystem = ColorSystem {
    name: "HDTV",
    red: Chromaticity::new(0.670, 0.330),
    green: Chromaticity::new(0.210, 0.710),
    blue: Chromaticity::new(0.150, 0.060),
    white: ILLUMINANT_D65,
    gamma: GAMMA_REC709,
};

/// CIE 1931 RGB (equal-energy white).
pub const CIE: ColorSystem = ColorSystem {
    name: "CIE",
    red: Chromaticity::new(0.7355, 0.2645),
    green: Chromaticity::new(0.2658, 0.7243),
    blue: Chromaticity::new(0.1669, 0.0085),
    white: ILLUMINANT_E,
    gamma: GAMMA_REC709,
};

/// ITU-R BT.709.
pub const REC709: ColorSystem = ColorSystem {
    name: "CIE REC 709",
    red: Chromaticity::new(0.64, 0.33),
    green: Chromaticity::new(0.30, 0.60),
    blue: Chromaticity::new(0.15, 0.06),
    white: ILLUMINANT_D65,
    gamma: GAMMA_REC709,
};

/// Every predefined color system.
pub const STANDARD_SYSTEMS: &[ColorSystem] = &[NTSC, EBU, SMPTE, HDTV, CIE, REC709];
