//! # SketchKit
//!
//! Pointer-anchored zoom-and-pan navigation for 2D drawing surfaces.
//!
//! ## Architecture
//!
//! SketchKit is organized as a workspace:
//!
//! 1. **sketchkit-core** - Geometry primitives, errors, shared utilities
//! 2. **sketchkit-canvas** - Viewport state store, zoom/pan transform
//!    controller, surface binding lifecycle
//! 3. **sketchkit** - Binary that wires the pieces together
//!
//! The canvas crate is the heart: a wheel event goes through the pure
//! [`ZoomPanController`], the result lands in the observable
//! [`CanvasStore`], and the rendering collaborator bound by
//! [`SurfaceBinding`] re-applies the transform.

pub use sketchkit_canvas as canvas;

pub use sketchkit_canvas::{
    CanvasConfig, CanvasState, CanvasStore, InteractionFlags, RenderSurface, SubscriptionId,
    SurfaceBinding, Viewport, WheelInput, ZoomPanController,
};

pub use sketchkit_core::{Bounds, ConfigError, Error, Point, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
