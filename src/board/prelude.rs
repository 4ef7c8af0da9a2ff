//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    AppliedMove, Board, BoardBuilder, Color, FenError, Move, MoveClass, MoveError, MoveParseError,
    Piece, PieceKind, Square, SquareError,
};
pub use crate::search::{search, GameState, SearchConfig, SearchEngine, SearchResult};
