//! Optical depth and transmittance along straight segments.

use glam::Vec3;

use crate::AtmosphereParams;
use crate::density::{density_mie, density_ozone, density_rayleigh, height};

/// Segments shorter than this (world units) contribute no optical depth.
pub const MIN_SEGMENT_LENGTH: f32 = 0.02;

/// Optical depth reported for a segment that passes below the planet surface.
pub const GROUND_OPTICAL_DEPTH: f32 = 10_000.0;

/// Per-channel optical depth accumulated along the segment from `a` to `b`.
///
/// The segment is split into `integration_steps` equal sub-steps and each
/// constituent density is sampled at the sub-step midpoints. If any sample
/// lies below the surface the segment is treated as opaque and
/// [`GROUND_OPTICAL_DEPTH`] is returned in every channel.
pub fn optical_depth(a: Vec3, b: Vec3, params: &AtmosphereParams) -> Vec3 {
    let length = a.distance(b);
    if length < MIN_SEGMENT_LENGTH {
        return Vec3::ZERO;
    }

    let steps = params.integration_steps.max(1);
    let step = (b - a) / steps as f32;
    let ds = length / steps as f32 * params.units_to_meters;

    let mut total_rayleigh = 0.0_f32;
    let mut total_mie = 0.0_f32;
    let mut total_ozone = 0.0_f32;

    for i in 0..steps {
        let p = a + step * (i as f32 + 0.5);
        let h = height(p, params);
        if h < 0.0 {
            return Vec3::splat(GROUND_OPTICAL_DEPTH);
        }
        total_rayleigh += density_rayleigh(h, params);
        total_mie += density_mie(h, params);
        total_ozone += density_ozone(h, params);
    }

    ds * (total_rayleigh * params.rayleigh_extinction()
        + total_mie * params.mie_extinction()
        + total_ozone * params.ozone_extinction)
}

/// Fraction of light per channel surviving the segment from `a` to `b`.
pub fn transmittance(a: Vec3, b: Vec3, params: &AtmosphereParams) -> Vec3 {
    attenuate(optical_depth(a, b, params))
}

/// Element-wise `exp(-tau)`.
pub(crate) fn attenuate(tau: Vec3) -> Vec3 {
    Vec3::new((-tau.x).exp(), (-tau.y).exp(), (-tau.z).exp())
}
