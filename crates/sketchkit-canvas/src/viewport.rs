//! Viewport transform state and coordinate conversion.
//!
//! A viewport is the (zoom, pan) pair mapping world coordinates onto the
//! screen. Pan is a screen-space translation applied after scaling:
//!
//! ```text
//! screen = world * zoom + pan
//! world  = (screen - pan) / zoom
//! ```
//!
//! Both spaces share the same orientation (origin top-left, +Y down), so no
//! axis flip is involved.

use std::fmt;

use serde::{Deserialize, Serialize};
use sketchkit_core::Point;

/// The visible mapping from world to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Scale factor (1.0 = 100%).
    pub zoom: f64,
    /// Screen-space translation offset.
    pub pan: Point,
}

impl Viewport {
    /// Creates a viewport with the given zoom and pan.
    pub fn new(zoom: f64, pan: Point) -> Self {
        Self { zoom, pan }
    }

    /// Converts a world coordinate to screen space.
    pub fn world_to_screen(&self, world: Point) -> Point {
        world * self.zoom + self.pan
    }

    /// Converts a screen coordinate to world space.
    ///
    /// The inverse of [`world_to_screen`](Self::world_to_screen). A zoom of
    /// zero would make the mapping non-invertible; callers keep zoom inside
    /// positive bounds, but this guards against division by zero anyway by
    /// treating the scale as 1.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        if self.zoom > 0.0 {
            (screen - self.pan) * (1.0 / self.zoom)
        } else {
            screen - self.pan
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, Point::ZERO)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan.x, self.pan.y
        )
    }
}
