//! Fixed pen style shared by every stroke.

use super::color::{BLACK, Color};
use crate::config::{StrokeCap, StrokeConfig};

/// Line style applied to each stroked segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Line width in pixels
    pub width: f64,
    pub cap: StrokeCap,
    pub color: Color,
}

impl Default for LineStyle {
    /// Two pixels wide, round caps, solid black.
    fn default() -> Self {
        Self {
            width: 2.0,
            cap: StrokeCap::Round,
            color: BLACK,
        }
    }
}

impl LineStyle {
    /// Configures a Cairo context to stroke with this style.
    pub fn apply(&self, ctx: &cairo::Context) {
        self.color.apply(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_cap(self.cap.to_cairo());
        ctx.set_line_join(cairo::LineJoin::Round);
    }
}

impl From<&StrokeConfig> for LineStyle {
    fn from(config: &StrokeConfig) -> Self {
        Self {
            width: config.width,
            cap: config.cap,
            color: config.color.to_color(),
        }
    }
}
