//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What the surface shows where nothing has been drawn.
///
/// Clearing the pad repaints every pixel with this background.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    /// Fully transparent pixels (the host page shows through)
    #[default]
    Transparent,
    /// Opaque white paper
    White,
}

impl Background {
    /// Returns the fill color for this background.
    pub fn color(self) -> Color {
        match self {
            Background::Transparent => TRANSPARENT,
            Background::White => WHITE,
        }
    }
}

/// Shape used at the ends of each stroked segment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeCap {
    /// Rounded ends; consecutive segments join seamlessly
    #[default]
    Round,
    /// Flat ends exactly at the sample
    Butt,
    /// Flat ends extended by half the line width
    Square,
}

impl StrokeCap {
    /// Maps the cap onto Cairo's line cap.
    pub fn to_cairo(self) -> cairo::LineCap {
        match self {
            StrokeCap::Round => cairo::LineCap::Round,
            StrokeCap::Butt => cairo::LineCap::Butt,
            StrokeCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Custom RGB color (0-255 per component)
/// color = [32, 64, 128]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: black, white, red, green, blue, yellow, orange, pink
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to black with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}
