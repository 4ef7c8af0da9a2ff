//! Checkers board representation and rules.
//!
//! American checkers on the 32 dark squares: men step diagonally forward,
//! kings step in all four diagonal directions, captures are mandatory and
//! a capturing piece keeps jumping while it can.
//!
//! # Example
//! ```
//! use checkers_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::Board;
pub use types::{AppliedMove, Color, Move, MoveClass, Piece, PieceKind, Square, SQUARE_COUNT};
