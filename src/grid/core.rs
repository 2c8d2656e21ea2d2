use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;

use serde_json::Value;

use crate::config::{BoundsPolicy, DEFAULT_LOG_TARGET, GridConfig};
use crate::error::{GridError, Result};
use crate::geometry::{Coord, Size};
use crate::logging::{LogLevel, Logger, fields_from, json_kv};
use crate::metrics::{GridMetrics, MetricSnapshot};
use crate::occupant::Occupant;
use crate::render::{RenderSettings, column_widths, render_row};

/// Fixed-size container holding at most one occupant per cell.
///
/// Occupants are kept in insertion order. Inserting at an occupied cell
/// evicts the previous occupant and appends the newcomer at the end of the
/// order. An occupant's position must not change while it is stored.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    size: Size,
    bounds: BoundsPolicy,
    render: RenderSettings,
    occupants: Vec<T>,
    index: HashMap<Coord, usize>,
    logger: Option<Logger>,
    log_target: String,
    metrics: Option<RefCell<GridMetrics>>,
}

impl<T: Occupant> Grid<T> {
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_size(Size::new(width, height))
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            size,
            bounds: BoundsPolicy::default(),
            render: RenderSettings::default(),
            occupants: Vec::new(),
            index: HashMap::new(),
            logger: None,
            log_target: DEFAULT_LOG_TARGET.to_string(),
            metrics: None,
        }
    }

    pub fn with_config(config: GridConfig) -> Self {
        let GridConfig {
            size,
            bounds,
            render,
            metrics,
            log_target,
        } = config;
        Self {
            bounds,
            render,
            log_target,
            metrics: metrics.then(|| RefCell::new(GridMetrics::new())),
            ..Self::from_size(size)
        }
    }

    /// Attach a structured logger for rejections and evictions.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Store `occupant` at its own position, returning whatever it displaced.
    ///
    /// Fails with [`GridError::OutOfBounds`] when the position lies past the
    /// grid edge; the grid is left untouched in that case.
    pub fn insert(&mut self, occupant: T) -> Result<Option<T>> {
        let coord = occupant.position();
        if !self.bounds.admits(self.size, coord) {
            self.record(GridMetrics::record_rejection);
            self.emit(
                LogLevel::Warn,
                "insert_rejected",
                [
                    json_kv("x", coord.x),
                    json_kv("y", coord.y),
                    json_kv("width", self.size.width),
                    json_kv("height", self.size.height),
                ],
            );
            return Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            });
        }

        let evicted = self.evict(coord);
        self.index.insert(coord, self.occupants.len());
        self.occupants.push(occupant);

        let replaced = evicted.is_some();
        self.record(|m| m.record_insert(replaced));
        if replaced {
            self.emit(
                LogLevel::Debug,
                "occupant_evicted",
                [json_kv("x", coord.x), json_kv("y", coord.y)],
            );
        }
        Ok(evicted)
    }

    /// Insert each occupant in order, stopping at the first rejection.
    /// Occupants placed before the failure stay in the grid.
    pub fn insert_all<I>(&mut self, occupants: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for occupant in occupants {
            self.insert(occupant)?;
        }
        Ok(())
    }

    /// Occupant at `(x, y)`, if any. Coordinates off the grid are simply vacant.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.get_at(Coord::new(x, y))
    }

    pub fn get_at(&self, coord: Coord) -> Option<&T> {
        self.index
            .get(&coord)
            .and_then(|&slot| self.occupants.get(slot))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index.contains_key(&Coord::new(x, y))
    }

    /// Rows in `[0, height)` with no occupant, ascending.
    pub fn empty_rows(&self) -> Vec<i32> {
        let occupied: HashSet<i32> = self.index.keys().map(|coord| coord.y).collect();
        self.size
            .rows()
            .filter(|row| !occupied.contains(row))
            .collect()
    }

    /// Occupants in insertion order. Each call starts a fresh traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.occupants.iter()
    }

    /// Occupants of row `y`, ascending by X.
    pub fn row(&self, y: i32) -> Vec<&T> {
        let mut row: Vec<&T> = self.occupants.iter().filter(|o| o.y() == y).collect();
        row.sort_by_key(|o| o.x());
        row
    }

    pub fn into_occupants(self) -> Vec<T> {
        self.occupants
    }

    /// Canonical text form using the grid's configured render settings.
    pub fn render(&self) -> String {
        self.render_with(&self.render)
    }

    /// One line per row in `[0, height)`, joined by the settings' separator.
    pub fn render_with(&self, settings: &RenderSettings) -> String {
        self.record(GridMetrics::record_render);

        let mut sorted: Vec<&T> = self.occupants.iter().collect();
        sorted.sort_by_key(|o| o.position());

        let widths = settings
            .fill
            .map(|fill| (fill, column_widths(self.size, sorted.iter().copied())));
        let fill = widths
            .as_ref()
            .map(|(fill, widths)| (*fill, widths.as_slice()));

        let mut cursor = 0;
        let mut lines = Vec::new();
        for y in self.size.rows() {
            while sorted.get(cursor).is_some_and(|o| o.y() < y) {
                cursor += 1;
            }
            let start = cursor;
            while sorted.get(cursor).is_some_and(|o| o.y() == y) {
                cursor += 1;
            }
            lines.push(render_row(&sorted[start..cursor], fill));
        }
        lines.join(settings.line_separator.as_str())
    }

    pub fn metrics(&self) -> Option<MetricSnapshot> {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.borrow().snapshot(self.occupants.len()))
    }

    fn evict(&mut self, coord: Coord) -> Option<T> {
        let slot = self.index.remove(&coord)?;
        let evicted = self.occupants.remove(slot);
        for idx in self.index.values_mut() {
            if *idx > slot {
                *idx -= 1;
            }
        }
        Some(evicted)
    }

    fn record(&self, update: impl FnOnce(&mut GridMetrics)) {
        if let Some(metrics) = &self.metrics {
            update(&mut *metrics.borrow_mut());
        }
    }

    fn emit<const N: usize>(&self, level: LogLevel, message: &str, fields: [(String, Value); N]) {
        if let Some(logger) = &self.logger {
            // Logging never fails an insert.
            let _ = logger.log_with_fields(level, &self.log_target, message, fields_from(fields));
        }
    }
}

impl<T: Occupant> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a, T: Occupant> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Occupant> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.occupants.into_iter()
    }
}
