//! Error types for board operations.

use std::fmt;

use super::{Move, Square};

/// Error type for position text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position text has the wrong number of `:`-separated fields (needs 3)
    WrongFieldCount { found: usize },
    /// Invalid side to move
    InvalidSideToMove { found: String },
    /// A piece list does not start with a color letter
    InvalidColor { field: String },
    /// A piece entry is not a square number, optionally prefixed by `K`
    InvalidSquare { entry: String },
    /// The same square is listed twice
    DuplicateSquare { square: Square },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 3 fields, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'B' or 'R'")
            }
            FenError::InvalidColor { field } => {
                write!(f, "Invalid color prefix in FEN field '{field}'")
            }
            FenError::InvalidSquare { entry } => {
                write!(f, "Invalid square entry '{entry}' in FEN")
            }
            FenError::DuplicateSquare { square } => {
                write!(f, "Square {square} listed more than once in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// No `-` or `x` between the two squares
    MissingSeparator { notation: String },
    /// One of the squares is not a number 1-32
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::MissingSeparator { notation } => {
                write!(f, "Move '{notation}' needs '-' or 'x' between squares")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Square number out of bounds (must be 1-32)
    OutOfRange { number: u32 },
    /// Not a number
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { number } => {
                write!(f, "Square {number} out of bounds (must be 1-32)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error returned when a move cannot be applied to a board.
///
/// The board is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    NoPiece { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongSide { square: Square },
    /// Another piece is in the middle of a multi-capture and must move
    MustContinue { square: Square },
    /// The move is not among the legal moves
    IllegalMove { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { square } => write!(f, "No piece on square {square}"),
            MoveError::WrongSide { square } => {
                write!(f, "Piece on square {square} belongs to the side not on move")
            }
            MoveError::MustContinue { square } => {
                write!(f, "The piece on square {square} must continue capturing")
            }
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}
