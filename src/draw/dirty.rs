//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles that the host needs to repaint after the
//! renderer touched the surface.

use crate::util::{self, Rect};

/// Tracks dirty rectangles accumulated between host repaints.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present.
    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Adds the area covered by a stroked segment, clipped to the surface.
    pub fn mark_segment(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        line_width: f64,
        width: i32,
        height: i32,
    ) {
        let rect = util::segment_bounds(from.0, from.1, to.0, to.1, line_width)
            .and_then(|rect| rect.clamp_to_bounds(width, height));
        self.mark_optional_rect(rect);
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}
