//! # specrend-color
//!
//! Spectrum to display RGB.
//!
//! This crate ties the workspace together into the classical rendering
//! chain and adds the two RGB stages that need no outside data:
//!
//! - **Gamut** - [`gamut::inside_gamut`], [`gamut::constrain_rgb`]
//! - **Normalization** - [`normalize::normalize_rgb`]
//! - **Chaining** - [`ColorOps`] methods on `Vec3` and `[f64; 3]`
//! - **Pipeline** - [`Renderer`] with a precomputed matrix
//!
//! # Architecture
//!
//! ```text
//!                   specrend-color
//!                         |
//!      +------------------+------------------+
//!      |                  |                  |
//! specrend-spectral specrend-primaries specrend-transfer
//!      |                  |                  |
//!      +--------+---------+                  |
//!               |                            |
//!         specrend-math                      |
//!               |                            |
//!               +----------------------------+
//!                             |
//!                       specrend-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use specrend_color::prelude::*;
//!
//! let renderer = Renderer::new(SMPTE).gamma_correct(true);
//! let out = renderer.render_blackbody(3000.0);
//! assert_eq!(out.rgb.x, 1.0);
//! assert!(out.rgb.inside_gamut());
//! ```
//!
//! # Dependencies
//!
//! - [`specrend-core`] - Chromaticity, errors
//! - [`specrend-math`] - Vec3, Mat3
//! - [`specrend-transfer`] - Gamma correction
//! - [`specrend-primaries`] - Color systems and matrices
//! - [`specrend-spectral`] - Integration and blackbody emitter
//! - [`tracing`] - Pipeline diagnostics
//!
//! # Used By
//!
//! - `specrend-cli` - Reference table binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod gamut;
pub mod normalize;
mod renderer;

pub use convert::ColorOps;
pub use gamut::{constrain_rgb, inside_gamut};
pub use normalize::normalize_rgb;
pub use renderer::{Renderer, Rendering};

// Re-export sub-crates for convenience
pub use specrend_math as math;
pub use specrend_primaries as primaries;
pub use specrend_spectral as spectral;
pub use specrend_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorOps, Renderer, Rendering};

    pub use specrend_core::{Chromaticity, Error, Result};
    pub use specrend_math::Vec3;
    pub use specrend_primaries::{
        CIE, ColorSystem, EBU, HDTV, NTSC, REC709, SMPTE, STANDARD_SYSTEMS,
    };
    pub use specrend_spectral::{Blackbody, bb_spectrum, spectrum_to_xyz};
    pub use specrend_transfer::{GAMMA_REC709, TransferCurve};
}
