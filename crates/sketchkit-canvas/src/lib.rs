//! # SketchKit Canvas
//!
//! Pointer-anchored zoom-and-pan navigation for a 2D drawing surface.
//!
//! As the user scrolls, the viewport zooms in or out while the point under
//! the pointer stays visually fixed, within configured zoom bounds.
//!
//! ## Architecture
//!
//! ```text
//! wheel event
//!   └─> SurfaceBinding::handle_wheel
//!         └─> ZoomPanController::next_viewport   (pure transform)
//!               └─> CanvasStore::set_zoom / set_pan
//!                     └─> observers (render surface re-applies transform)
//! ```
//!
//! - [`CanvasConfig`]: immutable construction-time configuration, validated
//!   up front.
//! - [`CanvasStore`]: observable store for the viewport and interaction
//!   flags with synchronous, ordered change notification.
//! - [`ZoomPanController`]: pure logic converting a wheel input into the
//!   next (zoom, pan) pair.
//! - [`SurfaceBinding`]: owns the rendering collaborator, wires input to
//!   the controller and store changes to the visible transform, and tears
//!   everything down exactly once.

pub mod config;
pub mod controller;
pub mod state;
pub mod surface;
pub mod viewport;

pub use config::{CanvasConfig, DimensionSettings, RenderSettings, ViewportSettings};
pub use controller::{WheelInput, ZoomPanController};
pub use state::{CanvasState, CanvasStore, InteractionFlags, SubscriptionId};
pub use surface::{RenderSurface, SurfaceBinding};
pub use viewport::Viewport;
