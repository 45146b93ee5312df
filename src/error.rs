use thiserror::Error;

/// Failures surfaced at the session boundary. Editing engines never fail.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode raster as PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("source image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("editor session already ended")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, EditorError>;
