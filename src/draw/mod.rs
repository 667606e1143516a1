//! Raster surface and rendering (Cairo-based).
//!
//! This module defines the drawing side of the pad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`LineStyle`]: the fixed pen applied to every segment
//! - [`Renderer`]: owner of the persistent surface; strokes segments and clears
//! - [`SurfaceSnapshot`]: pixel copy used by hosts and tests to inspect the surface
//! - [`DirtyTracker`]: regions touched since the host last repainted

pub mod color;
pub mod dirty;
pub mod render;
pub mod snapshot;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use render::Renderer;
pub use snapshot::SurfaceSnapshot;
pub use style::LineStyle;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
