//! Error handling for SketchKit.
//!
//! The runtime surface of the canvas subsystem is intentionally total: store
//! setters and the zoom/pan transform never fail on well-formed numeric
//! input. What can fail is construction — a configuration that violates its
//! own invariants is rejected up front rather than discovered per event.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Errors raised while validating a canvas configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension (canvas or viewport) is zero, negative, or non-finite.
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension {
        /// The offending field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The minimum zoom bound must be strictly positive.
    #[error("min_zoom must be > 0, got {0}")]
    NonPositiveMinZoom(f64),

    /// The zoom bounds are inverted or collapsed.
    #[error("max_zoom ({max_zoom}) must be greater than min_zoom ({min_zoom})")]
    InvertedZoomBounds {
        /// The configured minimum zoom.
        min_zoom: f64,
        /// The configured maximum zoom.
        max_zoom: f64,
    },

    /// The default zoom falls outside the configured bounds.
    #[error("default_zoom ({default_zoom}) outside [{min_zoom}, {max_zoom}]")]
    DefaultZoomOutOfRange {
        /// The configured default zoom.
        default_zoom: f64,
        /// The configured minimum zoom.
        min_zoom: f64,
        /// The configured maximum zoom.
        max_zoom: f64,
    },

    /// A rendering tunable is out of its valid range.
    #[error("Invalid rendering setting '{name}': {reason}")]
    InvalidRenderSetting {
        /// The offending field name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Top-level error type for SketchKit crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration validation failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used throughout SketchKit.
pub type Result<T> = std::result::Result<T, Error>;
