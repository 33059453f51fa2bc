//! # specrend-math
//!
//! Double precision math for tristimulus and RGB values.
//!
//! - [`Vec3`] - XYZ or RGB triplets
//! - [`Mat3`] - 3x3 matrices for XYZ <-> RGB transforms
//!
//! # Design
//!
//! All values are `f64`. Matrices are stored **row-major** and multiply
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! General inversion and interop go through [`glam`]'s `DMat3`/`DVec3`.
//!
//! # Usage
//!
//! ```rust
//! use specrend_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 0.5],
//! ]);
//! assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 1.0, 0.5));
//! ```
//!
//! # Used By
//!
//! - `specrend-primaries` - XYZ -> RGB matrix derivation
//! - `specrend-spectral` - Tristimulus accumulation
//! - `specrend-color` - Gamut and normalization stages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
