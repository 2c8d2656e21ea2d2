//! Bounded two-dimensional grid holding at most one occupant per cell.
//!
//! [`Grid`] stores anything implementing the [`Occupant`] capability set
//! (a position plus a printable symbol), rejects inserts past its edges and
//! renders its contents as deterministic multi-line text.
//!
//! ```
//! use city_grid::{Grid, Tile};
//!
//! let mut grid = Grid::new(3, 2);
//! grid.insert_all([Tile::new(0, 0, "A"), Tile::new(2, 0, "B"), Tile::new(1, 1, "C")])?;
//! assert_eq!(grid.render().lines().collect::<Vec<_>>(), vec!["AB", "C"]);
//! assert!(grid.get(1, 0).is_none());
//! # Ok::<(), city_grid::GridError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod metrics;
pub mod occupant;
pub mod render;
pub mod width;

pub use config::{BoundsPolicy, GridConfig};
pub use error::{GridError, Result};
pub use geometry::{Coord, Size};
pub use grid::Grid;
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{GridMetrics, MetricSnapshot};
pub use occupant::{HasPosition, Occupant, Renderable, Tile};
pub use render::{LINE_SEPARATOR, RenderSettings};
pub use width::display_width;
