//! Atmosphere parameter validation errors.

/// Reasons an [`AtmosphereParams`](crate::AtmosphereParams) cannot be integrated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtmosphereError {
    /// The integrator needs at least one sample per segment.
    #[error("integration step count must be at least 1")]
    ZeroIntegrationSteps,

    /// Planet radius is not a positive finite number.
    #[error("invalid planet radius: {0}")]
    InvalidRadius(f32),

    /// Atmosphere shell does not enclose the planet.
    #[error("atmosphere radius {atmosphere} must exceed planet radius {planet}")]
    ShellBelowSurface { planet: f32, atmosphere: f32 },

    /// A density profile has a non-positive scale height.
    #[error("invalid {name} scale height: {value}")]
    InvalidScaleHeight { name: &'static str, value: f32 },

    /// Mie single-scattering albedo outside `(0, 1]`.
    #[error("mie albedo must be in (0, 1], got {0}")]
    InvalidMieAlbedo(f32),

    /// Henyey-Greenstein asymmetry outside `(-1, 1)`.
    #[error("mie asymmetry must be in (-1, 1), got {0}")]
    InvalidAsymmetry(f32),
}
