//! Type system utilities and aliases.

pub mod aliases;

pub use aliases::*;
