use thiserror::Error;

use crate::geometry::{Coord, Size};

/// Unified result type for the city grid crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced by the grid and its configuration layer.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("occupant at {coord} is outside a {size} grid")]
    OutOfBounds { coord: Coord, size: Size },
    #[error("invalid grid configuration: {0}")]
    Config(String),
    #[error("config decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GridError {
    /// Coordinate that was rejected, if this is a bounds failure.
    pub fn rejected_coord(&self) -> Option<Coord> {
        match self {
            GridError::OutOfBounds { coord, .. } => Some(*coord),
            _ => None,
        }
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GridError::OutOfBounds { .. })
    }
}
