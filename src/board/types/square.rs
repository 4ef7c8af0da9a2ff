//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of playable (dark) squares.
pub const SQUARE_COUNT: usize = 32;

/// One of the 32 playable squares, stored as a 0-based index.
///
/// Squares are numbered 1-32 in standard checkers notation: row 0 (Black's
/// back rank) holds squares 1-4, row 7 (Red's back rank) holds 29-32.
/// On even rows the playable squares sit on odd columns and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from its 1-based checkers number.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= SQUARE_COUNT {
            Some(Square(number - 1))
        } else {
            None
        }
    }

    /// Create a square from row/column coordinates, if they name a playable square.
    #[must_use]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        if (row + col) % 2 == 0 {
            return None;
        }
        Some(Square((row * 4 + col / 2) as u8))
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// The 1-based checkers number of this square.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row 0-7, where row 0 holds squares 1-4.
    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        (self.0 / 4) as i8
    }

    /// Column 0-7.
    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        let slot = (self.0 % 4) as i8 * 2;
        if self.row() % 2 == 0 {
            slot + 1
        } else {
            slot
        }
    }

    /// All 32 squares in numeric order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s.trim().parse().map_err(|_| SquareError::InvalidNotation {
            notation: s.to_string(),
        })?;
        u8::try_from(number)
            .ok()
            .and_then(Square::new)
            .ok_or(SquareError::OutOfRange { number })
    }
}
