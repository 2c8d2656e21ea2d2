use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Cell coordinate inside a grid. `x` is the column, `y` the row.
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed grid dimensions measured in cells.
///
/// Non-positive dimensions are representable; such a grid simply has no
/// insertable cells under [`Size::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Row indices `0..height`, empty when the height is not positive.
    pub fn rows(&self) -> Range<i32> {
        0..self.height.max(0)
    }

    /// Column indices `0..width`, empty when the width is not positive.
    pub fn cols(&self) -> Range<i32> {
        0..self.width.max(0)
    }

    /// Upper-bound check only: negative coordinates pass.
    pub fn contains_upper(&self, coord: Coord) -> bool {
        coord.x <= self.width.saturating_sub(1) && coord.y <= self.height.saturating_sub(1)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && self.contains_upper(coord)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_order_by_row_then_column() {
        let mut coords = vec![Coord::new(2, 0), Coord::new(0, 1), Coord::new(0, 0)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(2, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn upper_check_lets_negative_coords_through() {
        let size = Size::new(3, 2);
        assert!(size.contains_upper(Coord::new(-1, 0)));
        assert!(!size.contains(Coord::new(-1, 0)));
        assert!(!size.contains_upper(Coord::new(3, 0)));
        assert!(!size.contains_upper(Coord::new(0, 2)));
        assert!(size.contains(Coord::new(2, 1)));
    }

    #[test]
    fn degenerate_sizes_have_no_rows() {
        let size = Size::new(0, -3);
        assert!(size.is_degenerate());
        assert_eq!(size.rows().count(), 0);
        assert_eq!(size.cols().count(), 0);
        assert!(!size.contains(Coord::new(0, 0)));
    }

    #[test]
    fn extreme_dimensions_do_not_overflow() {
        let size = Size::new(i32::MIN, i32::MIN);
        assert!(!size.contains_upper(Coord::new(0, 0)));
    }
}
