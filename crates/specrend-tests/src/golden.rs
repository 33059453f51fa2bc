//! Golden reference values for blackbody rendering.
//!
//! Normalized XYZ of a blackbody and its SMPTE RGB after gamut constraint
//! and normalization, every 500 K from 1000 K to 10000 K. XYZ is compared to
//! four decimal places, RGB by its three-decimal string form so that
//! rounding matches the published table exactly.

use specrend_color::{ColorOps, Renderer};
use specrend_math::Vec3;
use specrend_primaries::SMPTE;
use specrend_spectral::{bb_spectrum, spectrum_to_xyz};

const XYZ_TOLERANCE: f64 = 1e-4;

// ---------------------------------------------------------------------------
// Reference tables
// ---------------------------------------------------------------------------

/// (temperature, x, y, z)
const XYZ_REFERENCE: &[(f64, [f64; 3])] = &[
    (1000.0, [0.6528, 0.3444, 0.0028]),
    (1500.0, [0.5857, 0.3931, 0.0212]),
    (2000.0, [0.5267, 0.4133, 0.0600]),
    (2500.0, [0.4770, 0.4137, 0.1093]),
    (3000.0, [0.4369, 0.4041, 0.1590]),
    (3500.0, [0.4053, 0.3907, 0.2040]),
    (4000.0, [0.3805, 0.3768, 0.2428]),
    (4500.0, [0.3608, 0.3636, 0.2756]),
    (5000.0, [0.3451, 0.3516, 0.3032]),
    (5500.0, [0.3325, 0.3411, 0.3265]),
    (6000.0, [0.3221, 0.3318, 0.3461]),
    (6500.0, [0.3135, 0.3237, 0.3628]),
    (7000.0, [0.3064, 0.3166, 0.3770]),
    (7500.0, [0.3004, 0.3103, 0.3893]),
    (8000.0, [0.2952, 0.3048, 0.4000]),
    (8500.0, [0.2908, 0.3000, 0.4093]),
    (9000.0, [0.2869, 0.2956, 0.4174]),
    (9500.0, [0.2836, 0.2918, 0.4246]),
    (10000.0, [0.2807, 0.2884, 0.4310]),
];

/// (temperature, r, g, b) for SMPTE, constrained and normalized.
const SMPTE_RGB_REFERENCE: &[(f64, [f64; 3])] = &[
    (1000.0, [1.000, 0.007, 0.000]),
    (1500.0, [1.000, 0.126, 0.000]),
    (2000.0, [1.000, 0.234, 0.010]),
    (2500.0, [1.000, 0.349, 0.067]),
    (3000.0, [1.000, 0.454, 0.151]),
    (3500.0, [1.000, 0.549, 0.254]),
    (4000.0, [1.000, 0.635, 0.370]),
    (4500.0, [1.000, 0.710, 0.493]),
    (5000.0, [1.000, 0.778, 0.620]),
    (5500.0, [1.000, 0.837, 0.746]),
    (6000.0, [1.000, 0.890, 0.869]),
    (6500.0, [1.000, 0.937, 0.988]),
    (7000.0, [0.907, 0.888, 1.000]),
    (7500.0, [0.827, 0.839, 1.000]),
    (8000.0, [0.762, 0.800, 1.000]),
    (8500.0, [0.711, 0.766, 1.000]),
    (9000.0, [0.668, 0.738, 1.000]),
    (9500.0, [0.632, 0.714, 1.000]),
    (10000.0, [0.602, 0.693, 1.000]),
];

fn fmt3(v: Vec3) -> String {
    format!("{:.3} {:.3} {:.3}", v.x, v.y, v.z)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_blackbody_xyz() {
    let mut failures = Vec::new();
    for &(t, expected) in XYZ_REFERENCE {
        let xyz = spectrum_to_xyz(t, bb_spectrum).to_array();
        let off = xyz
            .iter()
            .zip(expected)
            .any(|(got, want)| (got - want).abs() > XYZ_TOLERANCE);
        if off {
            failures.push(format!("{t} K: got {xyz:?}, want {expected:?}"));
        }
    }
    assert!(failures.is_empty(), "XYZ mismatches:\n{}", failures.join("\n"));
}

#[test]
fn golden_smpte_rgb() {
    for &(t, expected) in SMPTE_RGB_REFERENCE {
        let rgb = spectrum_to_xyz(t, bb_spectrum)
            .to_rgb(&SMPTE)
            .constrain_rgb()
            .normalize_rgb();
        assert_eq!(fmt3(rgb), fmt3(Vec3::from_array(expected)), "{} K", t);
    }
}

#[test]
fn golden_renderer_matches_chain() {
    let renderer = Renderer::new(SMPTE);
    for &(t, expected) in SMPTE_RGB_REFERENCE {
        let out = renderer.render_blackbody(t);
        assert_eq!(fmt3(out.rgb), fmt3(Vec3::from_array(expected)), "{} K", t);
    }
}

#[test]
fn golden_tables_cover_same_temperatures() {
    let xyz: Vec<f64> = XYZ_REFERENCE.iter().map(|r| r.0).collect();
    let rgb: Vec<f64> = SMPTE_RGB_REFERENCE.iter().map(|r| r.0).collect();
    assert_eq!(xyz, rgb);
    assert_eq!(xyz.len(), 19);
}
