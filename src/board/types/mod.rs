//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Color`, `PieceKind` and `Piece`
//! - `Square` - one of the 32 playable squares
//! - `Move`, `MoveClass` and `AppliedMove` - move requests and their results

mod moves;
mod piece;
mod square;

pub use moves::{AppliedMove, Move, MoveClass};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, SQUARE_COUNT};
