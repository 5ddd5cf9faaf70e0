//! Immutable description of the planet and its atmospheric medium.

use glam::Vec3;

use crate::error::AtmosphereError;

/// Physical parameters of a planet and its atmosphere.
///
/// Positions and radii are in world units (kilometres). Scattering and
/// extinction coefficients are per metre; `units_to_meters` converts
/// integration step lengths before they are multiplied in.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereParams {
    /// Planet surface radius.
    pub planet_radius: f32,
    /// Outer radius of the atmosphere shell bounding integration.
    pub atmosphere_radius: f32,
    /// Rayleigh scattering coefficients at sea level (RGB). Rayleigh is non-absorbing,
    /// so these double as its extinction coefficients.
    pub rayleigh_scattering: Vec3,
    /// Mie scattering coefficients at sea level (RGB).
    pub mie_scattering: Vec3,
    /// Ratio of Mie scattering to Mie extinction.
    pub mie_albedo: f32,
    /// Ozone extinction coefficients (RGB).
    pub ozone_extinction: Vec3,
    /// Uniform multiplier applied to every density profile.
    pub density_scale: f32,
    /// Rayleigh scale height.
    pub rayleigh_scale_height: f32,
    /// Mie scale height.
    pub mie_scale_height: f32,
    /// Ozone density as a fraction of Rayleigh density.
    pub ozone_ratio: f32,
    /// Henyey-Greenstein asymmetry parameter for Mie scattering.
    pub mie_g: f32,
    /// Incident sunlight (RGB).
    pub sun_intensity: Vec3,
    /// Midpoint samples per integrated segment.
    pub integration_steps: u32,
    /// Flat color returned for rays that hit the ground.
    pub ground_albedo: Vec3,
    /// Cosine of the sun disk half-angle.
    pub sun_disk_cos: f32,
    /// Metres per world unit.
    pub units_to_meters: f32,
}

impl AtmosphereParams {
    /// Earth-like atmosphere: 6371 km planet with a 100 km shell.
    pub fn earth() -> Self {
        let mie_scattering = Vec3::splat(21e-6);
        Self {
            planet_radius: 6371.0,
            atmosphere_radius: 6371.0 + 100.0,
            rayleigh_scattering: Vec3::new(5.80e-6, 1.65e-5, 3.31e-5),
            mie_scattering,
            mie_albedo: 0.9,
            ozone_extinction: Vec3::new(1e-12, 1e-10, 1e-9),
            density_scale: 1.2,
            rayleigh_scale_height: 8.0,
            mie_scale_height: 1.2,
            ozone_ratio: 6e-7,
            mie_g: -0.8,
            sun_intensity: Vec3::splat(24.0),
            integration_steps: 20,
            ground_albedo: Vec3::splat(0.07),
            sun_disk_cos: 0.9993,
            units_to_meters: 1000.0,
        }
    }

    /// Rayleigh extinction coefficients (equal to scattering).
    pub fn rayleigh_extinction(&self) -> Vec3 {
        self.rayleigh_scattering
    }

    /// Mie extinction coefficients: scattering divided by the single-scattering albedo.
    pub fn mie_extinction(&self) -> Vec3 {
        self.mie_scattering / self.mie_albedo
    }

    /// Thickness of the atmosphere shell above the surface.
    pub fn thickness(&self) -> f32 {
        self.atmosphere_radius - self.planet_radius
    }

    /// Check that the parameters describe an atmosphere the integrator can evaluate.
    pub fn validate(&self) -> Result<(), AtmosphereError> {
        if self.integration_steps == 0 {
            return Err(AtmosphereError::ZeroIntegrationSteps);
        }
        if self.planet_radius <= 0.0 || !self.planet_radius.is_finite() {
            return Err(AtmosphereError::InvalidRadius(self.planet_radius));
        }
        if self.thickness() <= 0.0 || !self.atmosphere_radius.is_finite() {
            return Err(AtmosphereError::ShellBelowSurface {
                planet: self.planet_radius,
                atmosphere: self.atmosphere_radius,
            });
        }
        for (name, value) in [
            ("rayleigh", self.rayleigh_scale_height),
            ("mie", self.mie_scale_height),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(AtmosphereError::InvalidScaleHeight { name, value });
            }
        }
        if self.mie_albedo.is_nan() || self.mie_albedo <= 0.0 || self.mie_albedo > 1.0 {
            return Err(AtmosphereError::InvalidMieAlbedo(self.mie_albedo));
        }
        if self.mie_g.is_nan() || self.mie_g.abs() >= 1.0 {
            return Err(AtmosphereError::InvalidAsymmetry(self.mie_g));
        }
        Ok(())
    }
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self::earth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_is_valid() {
        assert!(AtmosphereParams::earth().validate().is_ok());
    }

    #[test]
    fn test_mie_extinction_exceeds_scattering() {
        let params = AtmosphereParams::earth();
        let ext = params.mie_extinction();
        assert!((ext.x - 21e-6 / 0.9).abs() < 1e-10);
        assert!(ext.cmpgt(params.mie_scattering).all());
    }

    #[test]
    fn test_rayleigh_is_non_absorbing() {
        let params = AtmosphereParams::earth();
        assert_eq!(params.rayleigh_extinction(), params.rayleigh_scattering);
    }

    #[test]
    fn test_shell_thickness() {
        assert!((AtmosphereParams::earth().thickness() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let params = AtmosphereParams {
            integration_steps: 0,
            ..AtmosphereParams::earth()
        };
        assert!(matches!(
            params.validate(),
            Err(AtmosphereError::ZeroIntegrationSteps)
        ));
    }

    #[test]
    fn test_shell_below_surface_rejected() {
        let params = AtmosphereParams {
            atmosphere_radius: 6000.0,
            ..AtmosphereParams::earth()
        };
        assert!(matches!(
            params.validate(),
            Err(AtmosphereError::ShellBelowSurface { .. })
        ));

        let flush = AtmosphereParams {
            atmosphere_radius: 6371.0,
            ..AtmosphereParams::earth()
        };
        assert_eq!(flush.thickness(), 0.0);
        assert!(matches!(
            flush.validate(),
            Err(AtmosphereError::ShellBelowSurface { .. })
        ));
    }

    #[test]
    fn test_bad_scale_height_rejected() {
        let params = AtmosphereParams {
            mie_scale_height: 0.0,
            ..AtmosphereParams::earth()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("mie"), "{err}");
    }

    #[test]
    fn test_bad_asymmetry_rejected() {
        let params = AtmosphereParams {
            mie_g: 1.0,
            ..AtmosphereParams::earth()
        };
        assert!(params.validate().is_err());
    }
}
