//! Read-only copy of the surface pixels.

use crate::config::Background;
use crate::util::Rect;

/// A copy of the surface taken at one instant.
///
/// Pixels are Cairo ARGB32 values: native-endian `u32`, premultiplied alpha.
/// A pixel counts as ink when it differs from the background it was cleared to.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    width: i32,
    height: i32,
    stride: usize,
    data: Vec<u8>,
    background: u32,
}

impl SurfaceSnapshot {
    pub(crate) fn new(
        width: i32,
        height: i32,
        stride: usize,
        data: Vec<u8>,
        background: Background,
    ) -> Self {
        Self {
            width,
            height,
            stride,
            data,
            background: background.color().to_argb32(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The whole surface as a rectangle.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Returns the ARGB32 value at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if !self.bounds()?.contains(x, y) {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Alpha channel at (x, y); 0 outside the surface.
    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        self.pixel(x, y).map_or(0, |value| (value >> 24) as u8)
    }

    /// Returns true if the pixel at (x, y) differs from the background.
    pub fn is_ink(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y).is_some_and(|value| value != self.background)
    }

    /// Number of pixels that differ from the background.
    pub fn inked_pixels(&self) -> usize {
        self.coords().filter(|&(x, y)| self.is_ink(x, y)).count()
    }

    /// Returns true if every pixel equals the background.
    pub fn is_blank(&self) -> bool {
        !self.coords().any(|(x, y)| self.is_ink(x, y))
    }

    /// Returns true if any pixel within `radius` (Chebyshev distance) of (x, y) is ink.
    pub fn has_ink_near(&self, x: i32, y: i32, radius: i32) -> bool {
        (y - radius..=y + radius)
            .any(|py| (x - radius..=x + radius).any(|px| self.is_ink(px, py)))
    }

    /// Smallest rectangle containing every ink pixel.
    pub fn ink_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for (x, y) in self.coords().filter(|&(x, y)| self.is_ink(x, y)) {
            let pixel = Rect {
                x,
                y,
                width: 1,
                height: 1,
            };
            bounds = Some(bounds.map_or(pixel, |b| b.union(pixel)));
        }
        bounds
    }

    /// Renders the snapshot as text, one character per `cell` x `cell` block.
    ///
    /// Blocks containing ink print `#`, empty blocks print `.`.
    pub fn to_ascii(&self, cell: i32) -> String {
        let cell = cell.max(1);
        let mut out = String::new();
        for row in (0..self.height).step_by(cell as usize) {
            for col in (0..self.width).step_by(cell as usize) {
                let inked = (row..(row + cell).min(self.height))
                    .any(|y| (col..(col + cell).min(self.width)).any(|x| self.is_ink(x, y)));
                out.push(if inked { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    fn coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}
