use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{HasPosition, Renderable};
use crate::geometry::Coord;

/// Plain positioned glyph for callers without a richer occupant type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Coord,
    pub symbol: String,
}

impl Tile {
    pub fn new(x: i32, y: i32, symbol: impl Into<String>) -> Self {
        Self {
            position: Coord::new(x, y),
            symbol: symbol.into(),
        }
    }
}

impl HasPosition for Tile {
    fn position(&self) -> Coord {
        self.position
    }
}

impl Renderable for Tile {
    fn symbol(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.symbol)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
