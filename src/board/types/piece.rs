//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side colors. Black moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    Red,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::Red];

    /// Get the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }

    /// Row direction in which this color's men advance.
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }

    /// Row on which this color's men are crowned.
    #[inline]
    #[must_use]
    pub const fn crowning_row(self) -> i8 {
        match self {
            Color::Black => 7,
            Color::Red => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::Red => 'r',
        }
    }

    /// Parse a side letter. `W` is accepted for Red, as PDN uses White/Black.
    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_lowercase() {
            'b' => Some(Color::Black),
            'r' | 'w' => Some(Color::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
        }
    }
}

/// Rank of a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Man,
    King,
}

/// A colored piece on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece::new(color, PieceKind::Man)
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Board character: lowercase for men, uppercase for kings.
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.color.to_char();
        if self.is_king() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
