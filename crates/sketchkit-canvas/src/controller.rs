//! Pointer-anchored zoom/pan transform logic.
//!
//! [`ZoomPanController`] turns a wheel input into the next viewport while
//! keeping the world point under the pointer visually fixed. It is pure: it
//! reads nothing but its arguments and writes nothing — the input binding
//! pushes the result into the [`CanvasStore`](crate::CanvasStore), which
//! keeps the transform testable without any event-system dependency.

use sketchkit_core::constants::{VIEW_PADDING, ZOOM_STEP_FACTOR};
use sketchkit_core::{Bounds, Point};

use crate::config::CanvasConfig;
use crate::viewport::Viewport;

/// Wheel sensitivity divisor. A delta of 100 (one typical notch) changes
/// zoom by 10%; faster scrolls change it proportionally more.
const WHEEL_ZOOM_DIVISOR: f64 = 1000.0;

/// A wheel input event in screen coordinates.
///
/// Positive `delta_y` (scroll down) zooms out, negative zooms in. After
/// processing, the input binding is expected to mark the originating event
/// as handled so it does not scroll the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical scroll amount.
    pub delta_y: f64,
    /// Pointer position at the time of the event, in screen coordinates.
    pub pointer: Point,
}

impl WheelInput {
    /// Creates a wheel input from a raw event.
    pub fn new(delta_y: f64, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            delta_y,
            pointer: Point::new(pointer_x, pointer_y),
        }
    }

    /// Returns true when every field is a usable finite number.
    pub fn is_finite(&self) -> bool {
        self.delta_y.is_finite() && self.pointer.is_finite()
    }
}

/// Computes viewport transitions within configured zoom bounds.
#[derive(Debug, Clone, Copy)]
pub struct ZoomPanController {
    min_zoom: f64,
    max_zoom: f64,
    view_width: f64,
    view_height: f64,
}

impl ZoomPanController {
    /// Creates a controller from a validated configuration.
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            min_zoom: config.dimensions.min_zoom,
            max_zoom: config.dimensions.max_zoom,
            view_width: config.viewport.width,
            view_height: config.viewport.height,
        }
    }

    /// The smallest permitted zoom factor.
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// The largest permitted zoom factor.
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Constrains a zoom factor to the configured bounds.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Computes the next viewport for a wheel event.
    ///
    /// The anchor is the pointer position expressed relative to the current
    /// pan (`pointer - pan`); scaling that anchor by the zoom ratio and
    /// subtracting it from the pointer keeps the content under the pointer
    /// visually fixed. The anchor deliberately ignores the current zoom —
    /// that is the established observable behavior, so it must not be
    /// replaced with the inverse-zoom form.
    ///
    /// Total over all inputs: non-finite events and degenerate current
    /// state fall through to the unchanged viewport rather than storing
    /// NaN downstream.
    pub fn next_viewport(&self, current: Viewport, wheel: &WheelInput) -> Viewport {
        if !wheel.is_finite() || !current.zoom.is_finite() {
            return current;
        }

        let raw_zoom = current.zoom * (1.0 - wheel.delta_y / WHEEL_ZOOM_DIVISOR);
        let next_zoom = self.clamp_zoom(raw_zoom);

        // Zoom is kept positive by the clamp invariant; if it is ever not,
        // skip the pan adjustment instead of dividing by zero.
        if current.zoom <= 0.0 {
            return Viewport::new(next_zoom, current.pan);
        }

        let anchor = wheel.pointer - current.pan;
        let next_pan = wheel.pointer - anchor * (next_zoom / current.zoom);
        Viewport::new(next_zoom, next_pan)
    }

    /// Steps zoom in by the standard factor, anchored at the view center.
    pub fn zoom_in(&self, current: Viewport) -> Viewport {
        self.zoom_to(current, current.zoom * ZOOM_STEP_FACTOR)
    }

    /// Steps zoom out by the standard factor, anchored at the view center.
    pub fn zoom_out(&self, current: Viewport) -> Viewport {
        self.zoom_to(current, current.zoom / ZOOM_STEP_FACTOR)
    }

    /// Moves to a target zoom, keeping the view center fixed.
    pub fn zoom_to(&self, current: Viewport, target_zoom: f64) -> Viewport {
        if !target_zoom.is_finite() || !current.zoom.is_finite() {
            return current;
        }

        let next_zoom = self.clamp_zoom(target_zoom);
        if current.zoom <= 0.0 {
            return Viewport::new(next_zoom, current.pan);
        }

        let center = Point::new(self.view_width / 2.0, self.view_height / 2.0);
        let anchor = center - current.pan;
        let next_pan = center - anchor * (next_zoom / current.zoom);
        Viewport::new(next_zoom, next_pan)
    }

    /// Computes a viewport that centers the given world-space bounds in the
    /// view with the standard padding, zoomed to fit.
    ///
    /// Returns `None` for degenerate bounds (empty, inverted, non-finite),
    /// leaving the caller's viewport untouched.
    pub fn fit_to_bounds(&self, bounds: &Bounds) -> Option<Viewport> {
        if !bounds.is_valid() {
            return None;
        }

        let padding_factor = 1.0 - VIEW_PADDING * 2.0;
        let zoom_x = self.view_width * padding_factor / bounds.width();
        let zoom_y = self.view_height * padding_factor / bounds.height();
        let zoom = self.clamp_zoom(zoom_x.min(zoom_y));

        // Place the world center at the view center: pan = screen - world * zoom.
        let view_center = Point::new(self.view_width / 2.0, self.view_height / 2.0);
        let pan = view_center - bounds.center() * zoom;
        Some(Viewport::new(zoom, pan))
    }
}
