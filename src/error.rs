//! Error types for surface setup and pixel access.

use thiserror::Error;

/// Errors raised while creating or reading the drawing surface.
///
/// Drawing operations themselves never fail from the caller's point of view;
/// Cairo failures during a stroke are logged and dropped.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Cairo surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Surface pixels are not accessible: {0}")]
    PixelAccess(#[from] cairo::BorrowError),

    #[error("Sketch pad is not mounted")]
    NotMounted,
}
