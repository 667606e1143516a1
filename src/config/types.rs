//! Configuration type definitions.

use super::enums::{Background, ColorSpec, StrokeCap};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface settings.
///
/// The surface is allocated once when the pad mounts and is never resized.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in device pixels (valid range: 1 - 4096)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in device pixels (valid range: 1 - 4096)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background shown where nothing is drawn and restored by clear
    #[serde(default)]
    pub background: Background,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: Background::default(),
        }
    }
}

/// Pen settings applied to every stroke.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Line width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_line_width")]
    pub width: f64,

    /// Segment end cap (round, butt, square)
    #[serde(default)]
    pub cap: StrokeCap,

    /// Pen color - either a named color (black, white, red, green, blue, yellow,
    /// orange, pink) or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            width: default_line_width(),
            cap: StrokeCap::default(),
            color: default_color(),
        }
    }
}

fn default_width() -> i32 {
    340
}

fn default_height() -> i32 {
    200
}

fn default_line_width() -> f64 {
    2.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}
