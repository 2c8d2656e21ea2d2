//! Grid module orchestrator.
//!
//! Callers import [`Grid`] from here; storage and rendering glue live in the
//! private `core` module.

mod core;

pub use self::core::Grid;
