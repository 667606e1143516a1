//! Cairo-backed raster renderer owning the drawing surface.

use super::dirty::DirtyTracker;
use super::snapshot::SurfaceSnapshot;
use super::style::LineStyle;
use crate::config::Background;
use crate::error::SketchError;
use crate::input::{Sample, StrokeSink};
use crate::util::Rect;
use log::{debug, warn};

/// Owns the persistent raster surface and performs every pixel mutation.
///
/// Segments are stroked the moment they arrive so a stroke becomes visible while
/// the gesture is still in progress. No Cairo context outlives a single call,
/// which keeps the surface exclusively owned for pixel reads.
pub struct Renderer {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
    style: LineStyle,
    background: Background,
    /// Current pen position; `None` outside a path
    pen: Option<Sample>,
    dirty: DirtyTracker,
}

impl Renderer {
    /// Allocates a `width` x `height` surface filled with `background`.
    ///
    /// # Errors
    /// Returns [`SketchError::InvalidDimensions`] for non-positive sizes and
    /// [`SketchError::Surface`] if Cairo cannot allocate the surface.
    pub fn new(
        width: i32,
        height: i32,
        style: LineStyle,
        background: Background,
    ) -> Result<Self, SketchError> {
        if width <= 0 || height <= 0 {
            return Err(SketchError::InvalidDimensions { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let mut renderer = Self {
            surface,
            width,
            height,
            style,
            background,
            pen: None,
            dirty: DirtyTracker::new(),
        };
        renderer.fill_background()?;
        renderer.dirty.mark_full();

        debug!(
            "Created {}x{} surface ({:?} background, {:.1}px {:?} pen)",
            width, height, background, style.width, style.cap
        );
        Ok(renderer)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// Current pen position, if a path is open.
    pub fn pen(&self) -> Option<Sample> {
        self.pen
    }

    /// Erases the entire surface back to its background.
    ///
    /// The pen is left where it is, so a stroke in progress keeps drawing from its
    /// last sample onto the cleared surface.
    pub fn clear(&mut self) {
        if let Err(err) = self.fill_background() {
            warn!("Failed to clear surface: {err}");
        }
        self.dirty.mark_full();
    }

    /// Drains the regions touched since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.dirty.take_regions(self.width, self.height)
    }

    /// Copies the current pixels out of the surface.
    ///
    /// # Errors
    /// Returns [`SketchError::PixelAccess`] if Cairo refuses to expose the data.
    pub fn snapshot(&mut self) -> Result<SurfaceSnapshot, SketchError> {
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data()?.to_vec();
        Ok(SurfaceSnapshot::new(
            self.width,
            self.height,
            stride,
            data,
            self.background,
        ))
    }

    fn fill_background(&self) -> Result<(), cairo::Error> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_operator(cairo::Operator::Source);
        self.background.color().apply(&ctx);
        ctx.paint()
    }

    fn stroke_segment(&self, from: Sample, to: Sample) -> Result<(), cairo::Error> {
        let ctx = cairo::Context::new(&self.surface)?;
        self.style.apply(&ctx);
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke()
    }
}

impl StrokeSink for Renderer {
    fn begin_path(&mut self, at: Sample) {
        self.pen = Some(at);
    }

    fn line_to(&mut self, to: Sample) {
        let Some(from) = self.pen else {
            debug!("Ignoring line_to without an open path");
            return;
        };

        if let Err(err) = self.stroke_segment(from, to) {
            warn!("Failed to stroke segment: {err}");
        }
        self.dirty.mark_segment(
            (from.x, from.y),
            (to.x, to.y),
            self.style.width,
            self.width,
            self.height,
        );
        self.pen = Some(to);
    }

    fn close_path(&mut self) {
        self.pen = None;
    }
}
