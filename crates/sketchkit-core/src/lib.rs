//! # SketchKit Core
//!
//! Core types, errors, and utilities shared by the SketchKit crates:
//! geometry primitives, the error taxonomy, numeric constants, and
//! shared-state type aliases.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{ConfigError, Error, Result};
pub use geometry::{Bounds, Point};

// Re-export type aliases for convenience
pub use types::{shared, thread_safe, Shared, ThreadSafe, ThreadSafeOption};
