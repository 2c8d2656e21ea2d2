use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::occupant::Occupant;
use crate::width::{display_width, pad_to_width};

/// Native line separator used between rendered rows.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Renderer parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub line_separator: String,
    /// Pads vacant cells when set. `None` keeps rows only as wide as their occupants.
    pub fill: Option<char>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            line_separator: LINE_SEPARATOR.to_string(),
            fill: None,
        }
    }
}

impl RenderSettings {
    pub fn padded(fill: char) -> Self {
        Self {
            fill: Some(fill),
            ..Self::default()
        }
    }

    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }
}

/// Display width of every column in `[0, width)`, at least 1 each.
pub(crate) fn column_widths<'a, T, I>(size: Size, occupants: I) -> Vec<usize>
where
    T: Occupant + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut widths = vec![1usize; size.cols().len()];
    for occupant in occupants {
        let x = occupant.x();
        if let Ok(col) = usize::try_from(x) {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(display_width(&occupant.symbol()));
            }
        }
    }
    widths
}

/// Render one row. `row` must already be sorted by ascending X.
pub(crate) fn render_row<T>(row: &[&T], fill: Option<(char, &[usize])>) -> String
where
    T: Occupant + ?Sized,
{
    let mut line = String::new();
    let Some((fill, widths)) = fill else {
        for occupant in row {
            line.push_str(&occupant.symbol());
        }
        return line;
    };

    let mut cells = row.iter().peekable();
    while let Some(occupant) = cells.next_if(|o| o.x() < 0) {
        line.push_str(&occupant.symbol());
    }
    for (col, width) in widths.iter().enumerate() {
        match cells.next_if(|o| usize::try_from(o.x()).is_ok_and(|x| x == col)) {
            Some(occupant) => pad_to_width(&mut line, &occupant.symbol(), *width, fill),
            None => pad_to_width(&mut line, "", *width, fill),
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::Tile;

    #[test]
    fn unpadded_rows_concatenate_symbols() {
        let a = Tile::new(0, 0, "A");
        let b = Tile::new(2, 0, "B");
        assert_eq!(render_row(&[&a, &b], None), "AB");
        assert_eq!(render_row::<Tile>(&[], None), "");
    }

    #[test]
    fn padded_rows_cover_every_column() {
        let a = Tile::new(0, 0, "A");
        let b = Tile::new(2, 0, "B");
        let widths = column_widths(Size::new(4, 1), [&a, &b]);
        assert_eq!(widths, vec![1, 1, 1, 1]);
        assert_eq!(render_row(&[&a, &b], Some(('.', widths.as_slice()))), "A.B.");
    }

    #[test]
    fn wide_symbols_widen_their_column() {
        let wide = Tile::new(1, 0, "城");
        let below = Tile::new(1, 1, "x");
        let widths = column_widths(Size::new(2, 2), [&wide, &below]);
        assert_eq!(widths, vec![1, 2]);
        assert_eq!(render_row(&[&below], Some((' ', widths.as_slice()))), " x ");
    }

    #[test]
    fn negative_columns_lead_the_padded_row() {
        let left = Tile::new(-1, 0, "<");
        let widths = column_widths(Size::new(2, 1), [&left]);
        assert_eq!(render_row(&[&left], Some(('.', widths.as_slice()))), "<..");
    }

    #[test]
    fn default_separator_is_native() {
        assert_eq!(RenderSettings::default().line_separator, LINE_SEPARATOR);
    }
}
