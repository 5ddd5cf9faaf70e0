//! Single-scattering sky model: Rayleigh + Mie + ozone over a spherical planet.
//!
//! Everything here is a pure function of its inputs and an explicit
//! [`AtmosphereParams`]. Evaluating one view ray touches no shared state, so
//! callers are free to evaluate pixels in any order or in parallel.

mod density;
mod error;
mod geometry;
mod optical_depth;
mod params;
mod phase;
mod scatter;

pub use density::{density_mie, density_ozone, density_rayleigh, height};
pub use error::AtmosphereError;
pub use geometry::{QUADRATIC_EPSILON, forward_ray_sphere, solve_quadratic};
pub use optical_depth::{GROUND_OPTICAL_DEPTH, MIN_SEGMENT_LENGTH, optical_depth, transmittance};
pub use params::AtmosphereParams;
pub use phase::{phase_henyey_greenstein, phase_rayleigh};
pub use scatter::{
    ACOS_CLAMP, ScatterComponents, atmosphere_exit, hits_ground, scatter_components,
    scattering_angle, single_scattering, sun_disk,
};
