//! Rendered sky image and its 8-bit encodings.

use std::io::Cursor;
use std::path::Path;

use glam::Vec3;

use crate::error::RenderError;
use crate::tone::linear_to_srgb;

/// Tone-mapped linear colors in row-major order, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl SkyImage {
    /// Color at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Average color over the whole image.
    pub fn mean(&self) -> Vec3 {
        if self.pixels.is_empty() {
            return Vec3::ZERO;
        }
        self.pixels.iter().copied().sum::<Vec3>() / self.pixels.len() as f32
    }

    /// Opaque RGBA8 with the sRGB transfer curve applied.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            for channel in color.to_array() {
                bytes.push((linear_to_srgb(channel) * 255.0 + 0.5) as u8);
            }
            bytes.push(255);
        }
        bytes
    }

    /// Encode as an RGBA8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut png_buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(Cursor::new(&mut png_buf), self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header().map_err(RenderError::Encode)?;
            writer
                .write_image_data(&self.to_rgba8())
                .map_err(RenderError::Encode)?;
            writer.finish().map_err(RenderError::Encode)?;
        }
        Ok(png_buf)
    }

    /// Encode as PNG and write it to `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        let data = self.encode_png()?;
        std::fs::write(path, data).map_err(RenderError::WriteError)
    }
}
