//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation and perft counts
//! - `make_move.rs` - Applying moves, captures, crowning, multi-jumps
//! - `fen.rs` - Position text parsing and formatting
//! - `edge_cases.rs` - Game over and unusual positions
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Move, Square};

pub(super) fn sq(number: u8) -> Square {
    Square::new(number).unwrap()
}

pub(super) fn mv(notation: &str) -> Move {
    notation.parse().unwrap()
}

pub(super) fn numbers(moves: &[Move]) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(ToString::to_string).collect();
    out.sort();
    out
}

pub(super) fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).unwrap()
}
