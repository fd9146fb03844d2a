//! Observable canvas state.
//!
//! [`CanvasStore`] holds the current viewport (zoom, pan) together with the
//! transient interaction flags, and notifies an explicit observer list on
//! every change. Dispatch is synchronous and ordered: each setter delivers
//! its notification to every observer, on the calling thread, before it
//! returns, so observers see updates in exactly the order the setters were
//! invoked.
//!
//! The store is constructed per surface and passed by handle to whichever
//! components need it — there is no global instance. Writes are expected to
//! come from a single place (the input binding / controller layer); reads
//! are concurrent and work on cloned snapshots.

use parking_lot::RwLock;
use sketchkit_core::Point;
use uuid::Uuid;

use crate::config::CanvasConfig;
use crate::viewport::Viewport;

/// Handle for unsubscribing a state observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Transient interaction flags, observational only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionFlags {
    /// An object drag is in progress.
    pub is_dragging: bool,
    /// A zoom gesture is in progress.
    pub is_zooming: bool,
    /// IDs of the currently selected objects.
    pub selected_ids: Vec<String>,
}

/// A consistent snapshot of the full canvas state.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    /// Current zoom factor.
    pub zoom: f64,
    /// Current screen-space pan offset.
    pub pan: Point,
    /// IDs of the currently selected objects.
    pub selected_ids: Vec<String>,
    /// An object drag is in progress.
    pub is_dragging: bool,
    /// A zoom gesture is in progress.
    pub is_zooming: bool,
}

impl CanvasState {
    /// The viewport portion of this snapshot.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.zoom, self.pan)
    }

    /// The interaction-flag portion of this snapshot.
    pub fn flags(&self) -> InteractionFlags {
        InteractionFlags {
            is_dragging: self.is_dragging,
            is_zooming: self.is_zooming,
            selected_ids: self.selected_ids.clone(),
        }
    }
}

/// Observer callback invoked with the state snapshot after each change.
type StateObserver = Box<dyn Fn(&CanvasState) + Send + Sync>;

/// Observable store for canvas viewport state and interaction flags.
pub struct CanvasStore {
    /// Snapshot captured at construction, restored by [`reset`](Self::reset).
    initial: CanvasState,
    state: RwLock<CanvasState>,
    /// Ordered observer list; delivery follows registration order.
    observers: RwLock<Vec<(SubscriptionId, StateObserver)>>,
}

impl CanvasStore {
    /// Creates a store initialized from the configuration: zoom at the
    /// configured default, pan at the origin, no selection, no gesture.
    pub fn new(config: &CanvasConfig) -> Self {
        let initial = CanvasState {
            zoom: config.dimensions.default_zoom,
            pan: Point::ZERO,
            selected_ids: Vec::new(),
            is_dragging: false,
            is_zooming: false,
        };
        Self {
            initial: initial.clone(),
            state: RwLock::new(initial),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Returns a consistent snapshot of the full state.
    pub fn snapshot(&self) -> CanvasState {
        self.state.read().clone()
    }

    /// Returns the current viewport (zoom, pan).
    pub fn viewport(&self) -> Viewport {
        self.state.read().viewport()
    }

    /// Returns the current interaction flags.
    pub fn flags(&self) -> InteractionFlags {
        self.state.read().flags()
    }

    /// Stores a zoom factor verbatim and notifies observers.
    ///
    /// Clamping is the transform controller's responsibility, not the
    /// store's; the store holds whatever it is given.
    pub fn set_zoom(&self, zoom: f64) {
        self.update(|state| state.zoom = zoom);
    }

    /// Stores a pan offset verbatim and notifies observers.
    pub fn set_pan(&self, pan: Point) {
        self.update(|state| state.pan = pan);
    }

    /// Replaces the selection and notifies observers.
    pub fn set_selected_ids(&self, ids: Vec<String>) {
        self.update(|state| state.selected_ids = ids);
    }

    /// Sets the dragging flag and notifies observers.
    pub fn set_dragging(&self, is_dragging: bool) {
        self.update(|state| state.is_dragging = is_dragging);
    }

    /// Sets the zooming flag and notifies observers.
    pub fn set_zooming(&self, is_zooming: bool) {
        self.update(|state| state.is_zooming = is_zooming);
    }

    /// Restores the construction-time snapshot and notifies observers.
    pub fn reset(&self) {
        let initial = self.initial.clone();
        self.update(move |state| *state = initial);
    }

    /// Registers an observer called synchronously after every change.
    ///
    /// The observer runs on the mutating thread, so it should return
    /// quickly to avoid stalling input handling.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&CanvasState) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.observers.write().push((id, Box::new(observer)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Removes an observer.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        let removed = observers.len() < before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Applies a mutation under the write lock, then notifies observers
    /// with the resulting snapshot. The lock is released before dispatch so
    /// observers can read the store freely.
    fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut CanvasState),
    {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            state.clone()
        };

        let observers = self.observers.read();
        for (_, observer) in observers.iter() {
            observer(&snapshot);
        }
    }
}

impl std::fmt::Debug for CanvasStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasStore")
            .field("state", &self.snapshot())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
