//! Occupant capabilities consumed by the grid.
//!
//! The grid never names a concrete occupant type; it only needs a position
//! and a printable symbol. Anything implementing both [`HasPosition`] and
//! [`Renderable`] is an [`Occupant`] through the blanket impl below.

mod tile;

use std::borrow::Cow;

use crate::geometry::Coord;

pub use tile::Tile;

/// Anything that sits at a fixed cell.
pub trait HasPosition {
    fn position(&self) -> Coord;

    fn x(&self) -> i32 {
        self.position().x
    }

    fn y(&self) -> i32 {
        self.position().y
    }
}

/// Anything that renders to a short text token, conventionally one character.
pub trait Renderable {
    fn symbol(&self) -> Cow<'_, str>;
}

/// Capability set required by [`crate::Grid`].
pub trait Occupant: HasPosition + Renderable {}

impl<T> Occupant for T where T: HasPosition + Renderable + ?Sized {}

impl<T: HasPosition + ?Sized> HasPosition for Box<T> {
    fn position(&self) -> Coord {
        (**self).position()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn symbol(&self) -> Cow<'_, str> {
        (**self).symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Park {
        at: Coord,
    }

    impl HasPosition for Park {
        fn position(&self) -> Coord {
            self.at
        }
    }

    impl Renderable for Park {
        fn symbol(&self) -> Cow<'_, str> {
            Cow::Borrowed("P")
        }
    }

    #[test]
    fn boxed_trait_objects_forward_capabilities() {
        let occupants: Vec<Box<dyn Occupant>> = vec![
            Box::new(Park {
                at: Coord::new(1, 2),
            }),
            Box::new(Tile::new(0, 0, "#")),
        ];
        assert_eq!(occupants[0].x(), 1);
        assert_eq!(occupants[0].y(), 2);
        assert_eq!(occupants[0].symbol(), "P");
        assert_eq!(occupants[1].position(), Coord::new(0, 0));
        assert_eq!(occupants[1].symbol(), "#");
    }
}
