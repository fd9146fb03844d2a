//! Canvas configuration.
//!
//! Configuration is supplied once at construction and never mutated at
//! runtime. It is organized into logical sections:
//! - Dimension settings (canvas size, zoom bounds)
//! - Viewport settings (visible region size and offset)
//! - Render settings (culling, batching, frame interval)
//!
//! Only the zoom bounds feed the transform logic; the remaining fields are
//! consumed by the rendering collaborator that draws the surface.

use serde::{Deserialize, Serialize};
use sketchkit_core::{ConfigError, Error, Result};

/// Canvas dimensions and zoom bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionSettings {
    /// Drawing surface width in pixels.
    pub width: f64,
    /// Drawing surface height in pixels.
    pub height: f64,
    /// Smallest permitted zoom factor. Must be strictly positive.
    pub min_zoom: f64,
    /// Largest permitted zoom factor. Must exceed `min_zoom`.
    pub max_zoom: f64,
    /// Zoom factor the canvas starts at and resets to.
    pub default_zoom: f64,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            min_zoom: 0.25,
            max_zoom: 4.0,
            default_zoom: 1.0,
        }
    }
}

/// Visible-region placement within the surrounding UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Horizontal offset of the viewport within its container.
    pub offset_x: f64,
    /// Vertical offset of the viewport within its container.
    pub offset_y: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Rendering tunables consumed by the drawing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Objects further than this many pixels outside the viewport are culled.
    pub culling_threshold: f64,
    /// Maximum number of objects drawn per render batch.
    pub batch_size: usize,
    /// Minimum interval between renders, in milliseconds.
    pub render_interval_ms: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            culling_threshold: 100.0,
            batch_size: 50,
            render_interval_ms: 16,
        }
    }
}

/// Immutable configuration for a canvas surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas dimensions and zoom bounds.
    pub dimensions: DimensionSettings,
    /// Visible-region placement.
    pub viewport: ViewportSettings,
    /// Rendering tunables.
    pub rendering: RenderSettings,
}

impl CanvasConfig {
    /// Creates a configuration with the given surface size and default
    /// zoom bounds.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            dimensions: DimensionSettings {
                width,
                height,
                ..Default::default()
            },
            viewport: ViewportSettings {
                width,
                height,
                ..Default::default()
            },
            rendering: RenderSettings::default(),
        }
    }

    /// Validates the configuration.
    ///
    /// Degenerate zoom bounds are a contract violation: they are rejected
    /// here, at construction, so the per-event transform never has to cope
    /// with them.
    pub fn validate(&self) -> Result<()> {
        let d = &self.dimensions;

        if !(d.width.is_finite() && d.width > 0.0) {
            return Err(dimension_error("dimensions.width", d.width));
        }
        if !(d.height.is_finite() && d.height > 0.0) {
            return Err(dimension_error("dimensions.height", d.height));
        }
        if !(self.viewport.width.is_finite() && self.viewport.width > 0.0) {
            return Err(dimension_error("viewport.width", self.viewport.width));
        }
        if !(self.viewport.height.is_finite() && self.viewport.height > 0.0) {
            return Err(dimension_error("viewport.height", self.viewport.height));
        }

        if !(d.min_zoom.is_finite() && d.min_zoom > 0.0) {
            return Err(ConfigError::NonPositiveMinZoom(d.min_zoom).into());
        }
        if !(d.max_zoom.is_finite() && d.max_zoom > d.min_zoom) {
            return Err(ConfigError::InvertedZoomBounds {
                min_zoom: d.min_zoom,
                max_zoom: d.max_zoom,
            }
            .into());
        }
        if !(d.default_zoom >= d.min_zoom && d.default_zoom <= d.max_zoom) {
            return Err(ConfigError::DefaultZoomOutOfRange {
                default_zoom: d.default_zoom,
                min_zoom: d.min_zoom,
                max_zoom: d.max_zoom,
            }
            .into());
        }

        if self.rendering.batch_size == 0 {
            return Err(Error::Config(ConfigError::InvalidRenderSetting {
                name: "rendering.batch_size",
                reason: "must be at least 1".to_string(),
            }));
        }
        if !(self.rendering.culling_threshold.is_finite() && self.rendering.culling_threshold >= 0.0)
        {
            return Err(Error::Config(ConfigError::InvalidRenderSetting {
                name: "rendering.culling_threshold",
                reason: format!("must be finite and >= 0, got {}", self.rendering.culling_threshold),
            }));
        }

        Ok(())
    }

    /// Validates and returns the configuration, for builder-style call sites.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

fn dimension_error(name: &'static str, value: f64) -> Error {
    Error::Config(ConfigError::InvalidDimension { name, value })
}
