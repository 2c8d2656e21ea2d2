//! Text rendering of grid rows.
//!
//! The canonical form is unpadded: each row is the concatenation of its
//! occupants' symbols in ascending X order. [`RenderSettings::fill`] switches
//! to a padded form where every column in `[0, width)` is present.

mod core;

pub use self::core::{LINE_SEPARATOR, RenderSettings};
pub(crate) use self::core::{column_widths, render_row};
