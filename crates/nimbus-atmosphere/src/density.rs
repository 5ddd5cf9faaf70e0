//! Height-dependent number density of each atmospheric constituent.

use glam::Vec3;

use crate::AtmosphereParams;

/// Signed altitude of `point` above the planet surface.
pub fn height(point: Vec3, params: &AtmosphereParams) -> f32 {
    point.length() - params.planet_radius
}

/// Molecular (Rayleigh) density at altitude `h`.
pub fn density_rayleigh(h: f32, params: &AtmosphereParams) -> f32 {
    params.density_scale * (h / -params.rayleigh_scale_height).exp()
}

/// Aerosol (Mie) density at altitude `h`.
pub fn density_mie(h: f32, params: &AtmosphereParams) -> f32 {
    params.density_scale * (h / -params.mie_scale_height).exp()
}

/// Ozone density at altitude `h`. Tracks the Rayleigh profile scaled by `ozone_ratio`.
pub fn density_ozone(h: f32, params: &AtmosphereParams) -> f32 {
    params.ozone_ratio * density_rayleigh(h, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sea_level_density_is_scale() {
        let params = AtmosphereParams::earth();
        assert!((density_rayleigh(0.0, &params) - 1.2).abs() < 1e-6);
        assert!((density_mie(0.0, &params) - 1.2).abs() < 1e-6);
        assert!((density_ozone(0.0, &params) - 1.2 * 6e-7).abs() < 1e-12);
    }

    #[test]
    fn test_density_falls_by_e_per_scale_height() {
        let params = AtmosphereParams::earth();
        let ratio = density_rayleigh(8.0, &params) / density_rayleigh(0.0, &params);
        assert!((ratio - (-1.0_f32).exp()).abs() < 1e-5);
        let ratio = density_mie(1.2, &params) / density_mie(0.0, &params);
        assert!((ratio - (-1.0_f32).exp()).abs() < 1e-5);
    }

    #[test]
    fn test_densities_strictly_decrease_with_height() {
        let params = AtmosphereParams::earth();
        let profiles: [(&str, fn(f32, &AtmosphereParams) -> f32); 3] = [
            ("rayleigh", density_rayleigh),
            ("mie", density_mie),
            ("ozone", density_ozone),
        ];

        for (name, profile) in profiles {
            let mut prev = profile(0.01, &params);
            for i in 1..200 {
                let h = i as f32 * 0.25;
                let d = profile(h, &params);
                assert!(d < prev, "{name} not decreasing at h={h}: {d} >= {prev}");
                prev = d;
            }
        }
    }

    #[test]
    fn test_densities_vanish_at_altitude() {
        let params = AtmosphereParams::earth();
        assert!(density_rayleigh(1000.0, &params) < 1e-20);
        assert!(density_mie(1000.0, &params) < 1e-20);
        assert!(density_ozone(1000.0, &params) < 1e-20);
    }

    #[test]
    fn test_height_is_signed() {
        let params = AtmosphereParams::earth();
        assert!((height(Vec3::new(0.0, 6381.0, 0.0), &params) - 10.0).abs() < 1e-3);
        assert!(height(Vec3::new(6000.0, 0.0, 0.0), &params) < 0.0);
    }
}
