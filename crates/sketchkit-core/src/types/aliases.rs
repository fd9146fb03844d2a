//! Type aliases for commonly used shared-state types.
//!
//! Complex nested types like `Arc<Mutex<Option<T>>>` obscure intent. The
//! aliases here give them names that say what they are for and keep the
//! locking strategy (`parking_lot`) in one place.

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when mutable state is shared within one thread (e.g. a UI event loop).
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`; lock guards are not poisoned on panic.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe optional wrapper for lazily-initialized state.
pub type ThreadSafeOption<T> = Arc<Mutex<Option<T>>>;

/// Wraps a value for single-threaded sharing.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Wraps a value for cross-thread sharing.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
