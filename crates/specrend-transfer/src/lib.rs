//! # specrend-transfer
//!
//! Gamma correction for linear display RGB.
//!
//! A color system stores its transfer curve as a single `f64`: zero selects
//! the Rec.709 curve, any other value is a power-law exponent. The
//! [`TransferCurve`] enum gives that convention a type.
//!
//! # Supported Curves
//!
//! | Curve | Gamma field | Formula |
//! |-------|-------------|---------|
//! | [`rec709`] | `0.0` | `1.099 * c^0.45 - 0.099`, constant below 0.018 |
//! | [`gamma`] | `g > 0` | `c^(1/g)` |
//!
//! # Usage
//!
//! ```rust
//! use specrend_transfer::{gamma_correct, TransferCurve, GAMMA_REC709};
//!
//! let encoded = gamma_correct(0.18, GAMMA_REC709);
//! assert!((encoded - 0.409).abs() < 1e-3);
//!
//! let crt = TransferCurve::from_gamma(2.2);
//! assert!((crt.apply(0.5) - 0.7297).abs() < 1e-4);
//! ```
//!
//! [`rec709::oetf_continuous`] keeps the BT.709 straight line below the
//! break point for callers that want a continuous curve.
//!
//! # Range
//!
//! Values are not clamped. Negative input to the power law yields NaN.
//!
//! # Used By
//!
//! - `specrend-primaries` - Color system gamma field
//! - `specrend-color` - Final pipeline stage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
pub mod gamma;
pub mod rec709;

pub use curve::{GAMMA_REC709, TransferCurve, gamma_correct, gamma_correct_rgb};
pub use gamma::gamma_oetf;
