//! # specrend-primaries
//!
//! Display color systems, standard white points, and the XYZ to RGB matrix.
//!
//! A [`ColorSystem`] is defined by the CIE (x, y) chromaticities of its three
//! primaries, the chromaticity of its white point, and a gamma value. From
//! those alone [`xyz_to_rgb_matrix`] derives the linear map taking a
//! chromaticity in CIE space to the weights of each primary.
//!
//! # Included Color Systems
//!
//! | System | White | Primaries |
//! |--------|-------|-----------|
//! | [`NTSC`] | Illuminant C | 1953 FCC |
//! | [`EBU`] | D65 | PAL/SECAM |
//! | [`SMPTE`] | D65 | SMPTE C |
//! | [`HDTV`] | D65 | 1953 FCC, EBU blue |
//! | [`CIE`] | Illuminant E | CIE 1931 RGB |
//! | [`REC709`] | D65 | ITU-R BT.709 |
//!
//! # Usage
//!
//! ```rust
//! use specrend_primaries::{SMPTE, xyz_to_rgb_matrix};
//! use specrend_math::Vec3;
//!
//! let m = xyz_to_rgb_matrix(&SMPTE);
//!
//! // The white point maps to equal RGB weights.
//! let w = SMPTE.white;
//! let rgb = m * Vec3::new(w.x, w.y, w.z());
//! assert!((rgb.x - rgb.y).abs() < 1e-12);
//! assert!((rgb.y - rgb.z).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`specrend-core`] - Chromaticity, errors
//! - [`specrend-math`] - Matrix operations
//! - [`specrend-transfer`] - Gamma interpretation
//!
//! # Used By
//!
//! - `specrend-color` - Rendering pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod system;

pub use system::*;

use specrend_core::{Chromaticity, Error, Result};
use specrend_math::{Mat3, Vec3};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts an (x, y) chromaticity to XYZ with Y = 1.
///
/// Returns NaN/infinite components when `y == 0`.
#[inline]
pub fn xy_to_xyz(c: Chromaticity) -> Vec3 {
    Vec3::new(c.x / c.y, 1.0, c.z() / c.y)
}

/// Projects XYZ onto the (x, y) chromaticity plane.
///
/// ```rust
/// use specrend_primaries::xyz_to_chromaticity;
/// use specrend_math::Vec3;
///
/// let c = xyz_to_chromaticity(Vec3::new(2.0, 1.0, 1.0));
/// assert_eq!((c.x, c.y), (0.5, 0.25));
/// ```
#[inline]
pub fn xyz_to_chromaticity(xyz: Vec3) -> Chromaticity {
    let sum = xyz.sum();
    Chromaticity::new(xyz.x / sum, xyz.y / sum)
}

/// Matrix whose columns are the primaries' (x, y, z) chromaticities.
///
/// Maps primary weights to a chromaticity: `xyz = P * rgb`.
#[inline]
pub fn primaries_matrix(cs: &ColorSystem) -> Mat3 {
    let col = |c: Chromaticity| Vec3::new(c.x, c.y, c.z());
    Mat3::from_col_vecs(col(cs.red), col(cs.green), col(cs.blue))
}

/// Computes the XYZ to RGB matrix for a color system.
///
/// # Algorithm
///
/// 1. Derive z = 1 - (x + y) for every primary and the white point
/// 2. Take the adjugate of the primaries matrix (its rows invert `P` up to
///    a per-row scale)
/// 3. Scale each row so white maps to RGB (1, 1, 1) at unit luminance:
///    the factor is `row . white_xyz / y_w`
///
/// Nothing is guarded: collinear primaries or a white point with y = 0
/// produce NaN, infinite, or all-zero rows. Use [`try_xyz_to_rgb_matrix`] to get an
/// error instead.
///
/// # Example
///
/// ```rust
/// use specrend_primaries::{REC709, xyz_to_rgb_matrix};
///
/// let m = xyz_to_rgb_matrix(&REC709);
/// assert!((m.m[0][0] - 3.2430).abs() < 1e-4);
/// ```
pub fn xyz_to_rgb_matrix(cs: &ColorSystem) -> Mat3 {
    let cofactors = primaries_matrix(cs).adjugate();
    let w = cs.white;
    let white = Vec3::new(w.x, w.y, w.z());

    // Dividing by y_w scales the white luminance to unity.
    let scaled = |i: usize| {
        let row = cofactors.row(i);
        row / (row.dot(white) / w.y)
    };

    Mat3::from_row_vecs(scaled(0), scaled(1), scaled(2))
}

/// Validating variant of [`xyz_to_rgb_matrix`].
///
/// # Errors
///
/// See [`ColorSystem::validate`].
pub fn try_xyz_to_rgb_matrix(cs: &ColorSystem) -> Result<Mat3> {
    cs.validate()?;
    Ok(xyz_to_rgb_matrix(cs))
}

/// Computes the RGB to XYZ matrix, the inverse of [`xyz_to_rgb_matrix`].
///
/// Returns `None` for degenerate color systems.
///
/// ```rust
/// use specrend_primaries::{EBU, rgb_to_xyz_matrix};
/// use specrend_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&EBU).unwrap();
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
pub fn rgb_to_xyz_matrix(cs: &ColorSystem) -> Option<Mat3> {
    xyz_to_rgb_matrix(cs).inverse()
}

/// Converts a chromaticity (or XYZ) to primary weights of a color system.
///
/// A chromaticity outside the triangle of the primaries yields at least one
/// negative weight.
#[inline]
pub fn xyz_to_rgb(cs: &ColorSystem, xyz: Vec3) -> Vec3 {
    xyz_to_rgb_matrix(cs) * xyz
}

pub(crate) fn check(cs: &ColorSystem) -> Result<()> {
    if cs.white.y == 0.0 || !cs.white.is_finite() {
        return Err(Error::DegenerateWhitePoint {
            system: cs.name.to_string(),
        });
    }

    let determinant = primaries_matrix(cs).determinant();
    if !determinant.is_finite() || determinant.abs() < COLLINEAR_EPSILON {
        return Err(Error::CollinearPrimaries {
            system: cs.name.to_string(),
            determinant,
        });
    }

    specrend_transfer::TransferCurve::try_from_gamma(cs.gamma)?;
    Ok(())
}

/// Primaries whose determinant falls below this are treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;
