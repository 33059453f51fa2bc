//! # specrend-core
//!
//! Core types for rendering light spectra as displayable color.
//!
//! This crate provides the foundational types used throughout the specrend
//! workspace:
//!
//! - [`Chromaticity`] - CIE 1931 (x, y) or CIE 1976 (u', v') coordinates
//! - [`Error`], [`Result`] - Validation errors for the checked API layer
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! specrend-core (this crate)
//!    ^
//!    |
//!    +-- specrend-math (vectors, matrices)
//!    +-- specrend-transfer (gamma correction)
//!    +-- specrend-primaries (color systems, XYZ -> RGB)
//!    +-- specrend-spectral (CIE integration, Planck emitter)
//!    +-- specrend-color (gamut, normalization, pipeline)
//! ```
//!
//! ## Numeric Contract
//!
//! Conversions in this workspace are total over `f64`: degenerate input
//! produces NaN or infinity instead of an error. Only the `try_*` and
//! `validate` entry points return [`Error`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod error;

pub use chromaticity::*;
pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use specrend_core::prelude::*;
///
/// let white = Chromaticity::new(0.3127, 0.3291);
/// let uv = white.to_upvp();
/// assert!(uv.x > 0.19 && uv.x < 0.2);
/// ```
pub mod prelude {
    pub use crate::chromaticity::Chromaticity;
    pub use crate::error::{Error, Result};
}
