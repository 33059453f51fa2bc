//! # specrend-spectral
//!
//! Spectral power distributions to CIE XYZ.
//!
//! An emission function `Fn(temperature, wavelength_nm) -> intensity` is
//! sampled at the 81 wavelengths of the CIE 1931 2-degree observer table
//! ([`cmf::CIE_COLOUR_MATCH`]) and weighted by the color matching functions.
//! The result is scaled so X + Y + Z = 1.
//!
//! # Usage
//!
//! ```rust
//! use specrend_spectral::{bb_spectrum, spectrum_to_xyz};
//!
//! let xyz = spectrum_to_xyz(6500.0, bb_spectrum);
//! assert!((xyz.x - 0.3135).abs() < 1e-4);
//! assert!((xyz.sum() - 1.0).abs() < 1e-9);
//! ```
//!
//! Any closure works as an emitter:
//!
//! ```rust
//! use specrend_spectral::spectrum_to_xyz;
//!
//! // Equal-energy spectrum lands near illuminant E.
//! let xyz = spectrum_to_xyz(0.0, |_, _| 1.0);
//! assert!((xyz.x - 1.0 / 3.0).abs() < 1e-2);
//! ```
//!
//! # Dependencies
//!
//! - [`specrend-core`] - Errors for the checked entry points
//! - [`specrend-math`] - Tristimulus vectors
//!
//! # Used By
//!
//! - `specrend-color` - Rendering pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blackbody;
pub mod cmf;
mod integrate;

pub use blackbody::{Blackbody, bb_spectrum};
pub use integrate::{spectrum_to_xyz, try_spectrum_to_xyz};
