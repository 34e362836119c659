//! Coordinate codec: position labels ("A1", "H8", "Z26") to board coordinates.
//!
//! ## Layout
//!
//! - Columns are 0-based and map to letters: column 0 is `A`, column 25 is `Z`.
//! - Rows are 1-based and written in decimal: row 1 is where the hounds start,
//!   row `dim` is where the fox starts.
//!
//! ```
//! use fox_hound::core::{Coord, Dimension};
//!
//! let c = Coord::decode("E8").unwrap();
//! assert_eq!((c.col, c.row), (4, 8));
//! assert_eq!(c.encode(), "E8");
//! assert!(c.is_on_board(Dimension::DEFAULT));
//! ```

use serde::{Deserialize, Serialize};

use super::config::Dimension;
use crate::error::{GameError, Result};

/// A board cell as (column, row).
///
/// Serialized as its position label, so saved structures stay human readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coord {
    /// 0-based column, `A` = 0.
    pub col: u8,
    /// 1-based row.
    pub row: u8,
}

impl Coord {
    /// Create a coordinate. No bounds check; see `is_on_board`.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Column letter (`A` + column).
    #[must_use]
    pub fn letter(self) -> char {
        char::from(b'A'.wrapping_add(self.col))
    }

    /// Render as a position label: column letter followed by the row number.
    #[must_use]
    pub fn encode(self) -> String {
        format!("{}{}", self.letter(), self.row)
    }

    /// Parse a position label.
    ///
    /// Fails with `GameError::Format` unless the label is 2 or 3 characters
    /// long, starts with an uppercase letter and ends in decimal digits.
    pub fn decode(label: &str) -> Result<Self> {
        let bytes = label.as_bytes();
        if !(2..=3).contains(&bytes.len()) {
            return Err(GameError::Format(label.to_string()));
        }

        let letter = bytes[0];
        if !letter.is_ascii_uppercase() {
            return Err(GameError::Format(label.to_string()));
        }
        let digits = &label[1..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameError::Format(label.to_string()));
        }

        let row = digits
            .parse::<u8>()
            .map_err(|_| GameError::Format(label.to_string()))?;

        Ok(Self {
            col: letter - b'A',
            row,
        })
    }

    /// Check that this cell lies on a `dim`×`dim` board.
    #[must_use]
    pub fn is_on_board(self, dim: Dimension) -> bool {
        usize::from(self.col) < dim.get() && self.row >= 1 && usize::from(self.row) <= dim.get()
    }

    /// Shift by a signed delta. `None` if either component would go negative
    /// or overflow; the result may still be off-board.
    #[must_use]
    pub fn offset(self, d_col: i8, d_row: i8) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(d_col)?,
            row: self.row.checked_add_signed(d_row)?,
        })
    }

    /// Signed (column, row) delta from `self` to `to`.
    #[must_use]
    pub fn delta_to(self, to: Coord) -> (i16, i16) {
        (
            i16::from(to.col) - i16::from(self.col),
            i16::from(to.row) - i16::from(self.row),
        )
    }

    /// The four diagonal neighbours that exist on a `dim`×`dim` board.
    pub fn diagonal_neighbours(self, dim: Dimension) -> impl Iterator<Item = Coord> {
        DIAGONALS
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
            .filter(move |c| c.is_on_board(dim))
    }
}

/// The four unit diagonal steps.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter(), self.row)
    }
}

impl std::str::FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<Coord> for String {
    fn from(c: Coord) -> String {
        c.encode()
    }
}

impl TryFrom<String> for Coord {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self> {
        Self::decode(&s)
    }
}
