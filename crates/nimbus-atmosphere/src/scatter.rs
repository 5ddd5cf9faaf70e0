//! Single-scattering integral along a view ray.
//!
//! Conventions: `view_dir` is the unit direction the ray travels from the eye
//! into the sky, `sun_dir` is the unit direction from the scene toward the sun.
//! The eye is expected to sit inside the atmosphere shell.

use std::f32::consts::PI;

use glam::Vec3;

use crate::AtmosphereParams;
use crate::density::{density_mie, density_rayleigh, height};
use crate::geometry::forward_ray_sphere;
use crate::optical_depth::{attenuate, optical_depth};
use crate::phase::{phase_henyey_greenstein, phase_rayleigh};

/// Scale applied to the cosine before `acos` so the argument never reaches ±1.
pub const ACOS_CLAMP: f32 = 0.99;

/// Rayleigh and Mie in-scattered radiance for one view ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScatterComponents {
    /// Molecular contribution.
    pub rayleigh: Vec3,
    /// Aerosol contribution.
    pub mie: Vec3,
}

impl ScatterComponents {
    /// Sum of both contributions.
    pub fn total(&self) -> Vec3 {
        self.rayleigh + self.mie
    }
}

/// Angle between the reversed view ray and the sun, with the [`ACOS_CLAMP`] bias applied.
pub fn scattering_angle(view_dir: Vec3, sun_dir: Vec3) -> f32 {
    (-view_dir.dot(sun_dir) * ACOS_CLAMP).acos()
}

/// Whether the view ray from `eye` hits the planet surface.
pub fn hits_ground(eye: Vec3, view_dir: Vec3, params: &AtmosphereParams) -> bool {
    forward_ray_sphere(eye, view_dir, params.planet_radius).is_some()
}

/// Point where the ray from `origin` along `dir` leaves the atmosphere shell.
///
/// Falls back to `origin` when the ray never reaches the shell.
pub fn atmosphere_exit(origin: Vec3, dir: Vec3, params: &AtmosphereParams) -> Vec3 {
    match forward_ray_sphere(origin, dir, params.atmosphere_radius) {
        Some(t) => origin + dir * t,
        None => origin,
    }
}

/// In-scattered sunlight along the view ray, split into Rayleigh and Mie parts.
///
/// Marches midpoint samples from `eye` to the atmosphere exit. Each sample is
/// lit by the sun through the atmosphere above it and seen through the
/// atmosphere between it and the eye. Does not test for ground hits.
pub fn scatter_components(
    eye: Vec3,
    view_dir: Vec3,
    sun_dir: Vec3,
    params: &AtmosphereParams,
) -> ScatterComponents {
    let theta = scattering_angle(view_dir, sun_dir);
    let exit = atmosphere_exit(eye, view_dir, params);

    let steps = params.integration_steps.max(1);
    let step = (exit - eye) / steps as f32;
    let ds = eye.distance(exit) / steps as f32 * params.units_to_meters;

    let mut total_rayleigh = Vec3::ZERO;
    let mut total_mie = Vec3::ZERO;

    for i in 0..steps {
        let p = eye + step * (i as f32 + 0.5);
        let h = height(p, params);

        let sun_exit = atmosphere_exit(p, sun_dir, params);
        let sun_to_sample = optical_depth(sun_exit, p, params);
        let sample_to_eye = optical_depth(p, eye, params);
        let attenuation = attenuate(sun_to_sample + sample_to_eye);

        total_rayleigh += density_rayleigh(h, params) * attenuation;
        total_mie += density_mie(h, params) * attenuation;
    }

    total_rayleigh *= ds * params.sun_intensity;
    total_mie *= ds * params.sun_intensity;

    ScatterComponents {
        rayleigh: params.sun_intensity
            * total_rayleigh
            * phase_rayleigh(theta)
            * params.rayleigh_scattering,
        mie: params.sun_intensity
            * total_mie
            * phase_henyey_greenstein(theta, params.mie_g)
            * params.mie_scattering,
    }
}

/// Bright additive sun disk, non-zero only within the `sun_disk_cos` cone.
pub fn sun_disk(eye: Vec3, view_dir: Vec3, sun_dir: Vec3, params: &AtmosphereParams) -> Vec3 {
    if view_dir.dot(sun_dir) <= params.sun_disk_cos {
        return Vec3::ZERO;
    }
    let exit = atmosphere_exit(eye, view_dir, params);
    params.sun_intensity * params.sun_intensity * PI * attenuate(optical_depth(exit, eye, params))
}

/// Radiance seen from `eye` along `view_dir`.
///
/// Returns the flat ground albedo when the ray hits the planet, otherwise the
/// single-scattered sky radiance plus the sun disk.
pub fn single_scattering(
    eye: Vec3,
    view_dir: Vec3,
    sun_dir: Vec3,
    params: &AtmosphereParams,
) -> Vec3 {
    if hits_ground(eye, view_dir, params) {
        return params.ground_albedo;
    }
    scatter_components(eye, view_dir, sun_dir, params).total()
        + sun_disk(eye, view_dir, sun_dir, params)
}
