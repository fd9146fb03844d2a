//! Shared numeric constants.

/// Fraction of the view reserved as padding when fitting content.
pub const VIEW_PADDING: f64 = 0.05;

/// Multiplier applied by the discrete zoom-in/zoom-out steps.
pub const ZOOM_STEP_FACTOR: f64 = 1.2;
