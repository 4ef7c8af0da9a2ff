//! The capability the search consumes from a rules engine.

use crate::board::{AppliedMove, Board, Color, Move, MoveError, Square};

/// A game position the search can explore.
///
/// `clone` must produce an independent deep copy: the search applies moves
/// to its own copy of every branch and never shares one between siblings.
pub trait GameState: Clone + Send + Sync {
    /// The side to move.
    fn turn(&self) -> Color;

    /// Legal moves for the side to move.
    fn moves(&self) -> Vec<Move>;

    /// Apply a move, mutating the receiver.
    fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError>;

    /// Whether the game has ended in this position.
    fn is_game_over(&self) -> bool;
}

impl GameState for Board {
    #[inline]
    fn turn(&self) -> Color {
        self.side_to_move()
    }

    #[inline]
    fn moves(&self) -> Vec<Move> {
        self.generate_moves()
    }

    #[inline]
    fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        Board::apply_move(self, from, to)
    }

    #[inline]
    fn is_game_over(&self) -> bool {
        Board::is_game_over(self)
    }
}
