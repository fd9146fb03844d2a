//! Surface binding lifecycle.
//!
//! Connects a [`CanvasStore`] to the rendering collaborator that owns the
//! visible drawing surface. The binding subscribes an observer that
//! re-applies `{zoom, pan}` to the surface on every state change, routes
//! wheel input through the [`ZoomPanController`], and guarantees the
//! surface's native resources are released exactly once on teardown.

use std::sync::Arc;

use sketchkit_core::{thread_safe, Point, ThreadSafe};

use crate::config::CanvasConfig;
use crate::controller::{WheelInput, ZoomPanController};
use crate::state::{CanvasStore, SubscriptionId};

/// The external rendering collaborator.
///
/// Implementations own a native drawing surface (a window, a GPU canvas, a
/// remote renderer). The binding drives it with sizing and transform
/// commands; everything else about drawing is the implementation's
/// business.
pub trait RenderSurface: Send + 'static {
    /// Sizes the surface, called once at activation.
    fn set_size(&mut self, width: f64, height: f64);

    /// Applies a zoom factor to the visible transform.
    fn apply_zoom(&mut self, zoom: f64);

    /// Applies a pan offset to the visible transform.
    fn apply_pan(&mut self, pan: Point);

    /// Releases native resources. Called exactly once by the binding.
    fn release(&mut self);
}

/// Owns a render surface for the duration of a canvas session.
///
/// Lifecycle: [`activate`](Self::activate) sizes the surface and subscribes
/// it to store changes; [`handle_wheel`](Self::handle_wheel) processes input
/// events; [`deactivate`](Self::deactivate) (or drop) unsubscribes and
/// releases the surface. Teardown is idempotent and safe even when
/// activation never completed.
pub struct SurfaceBinding<S: RenderSurface> {
    store: Arc<CanvasStore>,
    controller: ZoomPanController,
    surface: ThreadSafe<S>,
    config: CanvasConfig,
    subscription: Option<SubscriptionId>,
    released: bool,
}

impl<S: RenderSurface> SurfaceBinding<S> {
    /// Creates an inactive binding owning the given surface.
    pub fn new(config: CanvasConfig, store: Arc<CanvasStore>, surface: S) -> Self {
        let controller = ZoomPanController::new(&config);
        Self {
            store,
            controller,
            surface: thread_safe(surface),
            config,
            subscription: None,
            released: false,
        }
    }

    /// Handle to the shared store.
    pub fn store(&self) -> &Arc<CanvasStore> {
        &self.store
    }

    /// The transform controller derived from this binding's configuration.
    pub fn controller(&self) -> &ZoomPanController {
        &self.controller
    }

    /// True while the binding is subscribed to store changes.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Activates the binding: sizes the surface, applies the current
    /// viewport, and subscribes so every subsequent store change is
    /// re-applied to the visible transform.
    ///
    /// Calling this on an active or already-released binding is a no-op.
    pub fn activate(&mut self) {
        if self.subscription.is_some() || self.released {
            return;
        }

        {
            let mut surface = self.surface.lock();
            surface.set_size(self.config.dimensions.width, self.config.dimensions.height);
            let state = self.store.snapshot();
            surface.apply_zoom(state.zoom);
            surface.apply_pan(state.pan);
        }

        let surface = self.surface.clone();
        let id = self.store.subscribe(move |state| {
            let mut surface = surface.lock();
            surface.apply_zoom(state.zoom);
            surface.apply_pan(state.pan);
        });
        self.subscription = Some(id);
        tracing::debug!("Surface binding activated ({})", id);
    }

    /// Processes a wheel event: computes the pointer-anchored next viewport
    /// and writes it to the store (zoom first, then pan — one update each,
    /// no coalescing).
    ///
    /// Returns true when the event was consumed; the caller should then
    /// mark the originating input event as handled so it does not fall
    /// through to default scrolling. Inactive bindings consume nothing.
    pub fn handle_wheel(&self, wheel: &WheelInput) -> bool {
        if self.subscription.is_none() {
            return false;
        }

        let next = self.controller.next_viewport(self.store.viewport(), wheel);
        self.store.set_zoom(next.zoom);
        self.store.set_pan(next.pan);
        true
    }

    /// Deactivates the binding: unsubscribes from the store and releases
    /// the surface's native resources.
    ///
    /// Idempotent — repeated or out-of-order calls (including before
    /// activation) are safe, and the surface is released exactly once.
    pub fn deactivate(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.store.unsubscribe(id);
            tracing::debug!("Surface binding deactivated ({})", id);
        }
        if !self.released {
            self.released = true;
            self.surface.lock().release();
        }
    }
}

impl<S: RenderSurface> Drop for SurfaceBinding<S> {
    fn drop(&mut self) {
        // Release on all exit paths, whether or not deactivate() was called.
        self.deactivate();
    }
}
