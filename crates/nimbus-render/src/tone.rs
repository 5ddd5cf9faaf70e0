//! Radiance compression and display encoding.

use glam::Vec3;

/// Exposure used for the sky.
pub const DEFAULT_EXPOSURE: f32 = 0.02;

/// Exponential tone curve `1 − exp(−exposure · radiance)`, per channel.
///
/// Monotonic and bounded to `[0, 1)` for non-negative radiance.
pub fn tone_map(radiance: Vec3, exposure: f32) -> Vec3 {
    Vec3::ONE
        - Vec3::new(
            (-exposure * radiance.x).exp(),
            (-exposure * radiance.y).exp(),
            (-exposure * radiance.z).exp(),
        )
}

/// Standard sRGB transfer function for a linear value in `[0, 1]`.
pub fn linear_to_srgb(linear: f32) -> f32 {
    let c = linear.clamp(0.0, 1.0);
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
