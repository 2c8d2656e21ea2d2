//! Error module orchestrator.

mod types;

pub use types::{GridError, Result};
