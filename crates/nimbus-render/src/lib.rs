//! CPU sky rendering on top of `nimbus-atmosphere`.
//!
//! [`SkyCamera`] turns screen offsets into view rays, [`SkyRenderer`]
//! evaluates the scattering model per pixel and tone maps the result, and
//! [`SkyImage`] converts the output to 8-bit sRGB and PNG.

mod camera;
mod error;
mod image;
mod renderer;
mod tone;

pub use camera::{DEFAULT_ASPECT, SkyCamera};
pub use error::RenderError;
pub use image::SkyImage;
pub use renderer::SkyRenderer;
pub use tone::{DEFAULT_EXPOSURE, linear_to_srgb, tone_map};
