//! Requested moves and the records produced by applying them.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move request: a source and destination square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// A single step covers one row; a jump covers two.
    #[inline]
    #[must_use]
    pub const fn is_jump(self) -> bool {
        (self.to.row() - self.from.row()).abs() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `11-15` or `22x15`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (from, to) = s
            .split_once(['-', 'x', 'X'])
            .ok_or_else(|| MoveParseError::MissingSeparator {
                notation: s.to_string(),
            })?;
        let parse = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        Ok(Move::new(parse(from)?, parse(to)?))
    }
}

/// Class of an executed move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveClass {
    /// One diagonal step onto an empty square.
    Slide,
    /// A capture over an opposing piece.
    Jump,
}

/// The record of a successfully applied move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// The moving piece before the move; a crowning man still reports `Man`.
    pub piece: Piece,
    pub class: MoveClass,
    pub promoted: bool,
    pub captured: Option<(Square, Piece)>,
}

impl AppliedMove {
    /// The move request this record answers.
    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    #[inline]
    #[must_use]
    pub const fn is_jump(&self) -> bool {
        matches!(self.class, MoveClass::Jump)
    }

    /// Two-character flag code: `r` slide or `j` jump, then `p` if the move
    /// crowned the piece, `-` otherwise.
    #[must_use]
    pub const fn flag(&self) -> [char; 2] {
        let class = match self.class {
            MoveClass::Slide => 'r',
            MoveClass::Jump => 'j',
        };
        let promotion = if self.promoted { 'p' } else { '-' };
        [class, promotion]
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_move())
    }
}

impl From<AppliedMove> for Move {
    fn from(applied: AppliedMove) -> Self {
        applied.as_move()
    }
}
