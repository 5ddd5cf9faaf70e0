//! Rendering and image output errors.

/// Errors produced while rendering or writing a sky image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Requested image has no pixels.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// PNG encoder rejected the image.
    #[error("failed to encode png: {0}")]
    Encode(#[source] png::EncodingError),

    /// Writing the encoded image failed.
    #[error("failed to write image: {0}")]
    WriteError(#[source] std::io::Error),
}
