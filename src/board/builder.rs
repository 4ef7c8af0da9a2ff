//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than parsing position text.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(10, Color::Red, PieceKind::Man)
//!     .piece(6, Color::Black, PieceKind::Man)
//!     .piece(20, Color::Black, PieceKind::King)
//!     .side_to_move(Color::Red)
//!     .build();
//! assert_eq!(board.generate_moves().len(), 1);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::Black,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = Color::ALL
            .iter()
            .flat_map(|&color| board.pieces(color).collect::<Vec<_>>())
            .collect();
        BoardBuilder {
            pieces,
            side_to_move: Color::Black,
        }
    }

    /// Place a piece on a square given by its checkers number.
    ///
    /// Numbers outside 1-32 are ignored. A later placement on the same
    /// square replaces the earlier one.
    #[must_use]
    pub fn piece(mut self, number: u8, color: Color, kind: PieceKind) -> Self {
        if let Some(sq) = Square::new(number) {
            self.pieces.retain(|&(s, _)| s != sq);
            self.pieces.push((sq, Piece::new(color, kind)));
        }
        self
    }

    /// Empty a square.
    #[must_use]
    pub fn clear(mut self, number: u8) -> Self {
        self.pieces.retain(|&(s, _)| s.number() != number);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, piece) in self.pieces {
            board.set_piece(sq, Some(piece));
        }
        board.side_to_move = self.side_to_move;
        board
    }
}
