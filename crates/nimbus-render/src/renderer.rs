//! Per-pixel sky evaluation over an image grid.

use std::time::Instant;

use glam::{Vec2, Vec3};
use nimbus_atmosphere::{AtmosphereParams, single_scattering};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::camera::SkyCamera;
use crate::error::RenderError;
use crate::image::SkyImage;
use crate::tone::{DEFAULT_EXPOSURE, tone_map};

/// Altitude of the default eye above the surface (10 m).
const DEFAULT_EYE_ALTITUDE: f32 = 0.01;

/// Renders the sky as seen from a fixed eye position.
#[derive(Clone, Debug)]
pub struct SkyRenderer {
    /// Atmosphere evaluated for every pixel.
    pub params: AtmosphereParams,
    /// Tone-mapping exposure.
    pub exposure: f32,
    /// Eye position in world space.
    pub eye: Vec3,
}

impl SkyRenderer {
    /// Renderer with the eye 10 m above the north pole of `params`' planet.
    pub fn new(params: AtmosphereParams) -> Self {
        let eye = Vec3::new(0.0, params.planet_radius + DEFAULT_EYE_ALTITUDE, 0.0);
        Self {
            params,
            exposure: DEFAULT_EXPOSURE,
            eye,
        }
    }

    /// Place the eye `altitude` world units above the surface along +Y.
    #[must_use]
    pub fn with_eye_altitude(mut self, altitude: f32) -> Self {
        self.eye = Vec3::new(0.0, self.params.planet_radius + altitude, 0.0);
        self
    }

    /// Override the tone-mapping exposure.
    #[must_use]
    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }

    /// Tone-mapped color for one screen offset in `[-1, 1]²`.
    pub fn shade(&self, camera: &SkyCamera, sun_dir: Vec3, offset: Vec2) -> Vec3 {
        let view_dir = camera.ray_direction(offset);
        let radiance = single_scattering(self.eye, view_dir, sun_dir, &self.params);
        tone_map(radiance, self.exposure)
    }

    /// Render a `width × height` image. Rows are shaded in parallel.
    pub fn render(
        &self,
        camera: &SkyCamera,
        sun_dir: Vec3,
        width: u32,
        height: u32,
    ) -> Result<SkyImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }

        let start = Instant::now();
        let sun_dir = sun_dir.normalize();
        let mut pixels = vec![Vec3::ZERO; width as usize * height as usize];

        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, line)| {
                for (col, pixel) in line.iter_mut().enumerate() {
                    let offset = pixel_offset(col as u32, row as u32, width, height);
                    *pixel = self.shade(camera, sun_dir, offset);
                }
            });

        let elapsed = start.elapsed();
        let rays = ray_count(width, height);
        info!(
            width,
            height,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "rendered sky"
        );
        debug!(
            rays,
            us_per_ray = elapsed.as_secs_f64() * 1e6 / rays as f64,
            "sky render cost"
        );

        Ok(SkyImage {
            width,
            height,
            pixels,
        })
    }
}

/// Primary rays traced for a `width × height` image.
fn ray_count(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height)
}

/// Screen offset of the center of pixel (`x`, `y`), with row 0 at the top.
pub(crate) fn pixel_offset(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32 * 2.0 - 1.0,
        1.0 - (y as f32 + 0.5) / height as f32 * 2.0,
    )
}
