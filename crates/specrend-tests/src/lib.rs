//! Integration tests for specrend crates.
//!
//! This crate contains end-to-end tests that exercise the spectral,
//! primaries, transfer, and color crates together.

#[cfg(test)]
mod golden;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use specrend_color::{ColorOps, Renderer};
    use specrend_core::{Chromaticity, Error};
    use specrend_primaries::{ColorSystem, NTSC, SMPTE, STANDARD_SYSTEMS};
    use specrend_spectral::{Blackbody, bb_spectrum, spectrum_to_xyz, try_spectrum_to_xyz};
    use specrend_transfer::{GAMMA_REC709, gamma_correct};

    /// Every standard system, every blackbody from 1000 K to 10000 K.
    #[test]
    fn test_constrained_always_inside_gamut() {
        for cs in STANDARD_SYSTEMS {
            for t in (1000..=10000).step_by(50) {
                let rgb = spectrum_to_xyz(t as f64, bb_spectrum)
                    .to_rgb(cs)
                    .constrain_rgb();
                assert!(rgb.inside_gamut(), "{} at {} K: {:?}", cs.name, t, rgb);
            }
        }
    }

    #[test]
    fn test_low_temperatures_need_approximation() {
        // Deep red blackbodies fall outside every display triangle but CIE.
        let raw = spectrum_to_xyz(1000.0, bb_spectrum).to_rgb(&NTSC);
        assert!(!raw.inside_gamut());
        let ok = spectrum_to_xyz(5000.0, bb_spectrum).to_rgb(&NTSC);
        assert!(ok.inside_gamut());
    }

    #[test]
    fn test_blackbody_xyz_sums_to_one() {
        for t in (1000..=10000).step_by(100) {
            let xyz = spectrum_to_xyz(t as f64, bb_spectrum);
            assert_abs_diff_eq!(xyz.sum(), 1.0, epsilon = 1e-9);
            assert!(xyz.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_6500k_scenario() {
        let xyz = spectrum_to_xyz(6500.0, bb_spectrum);
        assert_eq!(format!("{:.4} {:.4} {:.4}", xyz.x, xyz.y, xyz.z), "0.3135 0.3237 0.3628");

        let rgb = xyz.to_rgb(&SMPTE).constrain_rgb().normalize_rgb();
        assert_eq!(format!("{:.3} {:.3} {:.3}", rgb.x, rgb.y, rgb.z), "1.000 0.937 0.988");

        let encoded = rgb.gamma_correct(&SMPTE);
        assert_eq!(encoded.x, gamma_correct(rgb.x, GAMMA_REC709));
        assert_abs_diff_eq!(encoded.y, 0.968226, epsilon = 1e-6);
        assert_abs_diff_eq!(encoded.z, 0.994165, epsilon = 1e-6);
    }

    #[test]
    fn test_upvp_roundtrip_on_blackbody_locus() {
        for t in (2000..=9000).step_by(1000) {
            let xy = spectrum_to_xyz(t as f64, bb_spectrum).to_chromaticity();
            let back = xy.to_upvp().to_xy_exact();
            assert_abs_diff_eq!(back.x, xy.x, epsilon = 1e-12);
            assert_abs_diff_eq!(back.y, xy.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_checked_layer_agrees() {
        for cs in STANDARD_SYSTEMS {
            let renderer = Renderer::try_new(*cs).unwrap();
            let bb = Blackbody::new(4200.0).unwrap();
            assert_eq!(
                renderer.try_render_blackbody(bb.kelvin()),
                Ok(renderer.render_blackbody(4200.0))
            );
        }
        assert_eq!(
            try_spectrum_to_xyz(3000.0, |_, _| 0.0),
            Err(Error::ZeroSpectrum { sum: 0.0 })
        );
    }

    #[test]
    fn test_custom_system_by_value() {
        let custom = ColorSystem {
            name: "Wide",
            red: Chromaticity::new(0.708, 0.292),
            green: Chromaticity::new(0.170, 0.797),
            blue: Chromaticity::new(0.131, 0.046),
            ..SMPTE
        };
        let renderer = Renderer::try_new(custom).unwrap();
        // A wider gamut keeps more of the locus unapproximated.
        assert!(!renderer.render_blackbody(1500.0).approximated);
        assert!(Renderer::new(SMPTE).render_blackbody(1500.0).approximated);
    }
}
