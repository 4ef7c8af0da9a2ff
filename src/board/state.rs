use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square, SQUARE_COUNT};

/// A checkers position: piece placement, side to move, and the piece that
/// is in the middle of a multi-capture, if any.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [Option<Piece>; SQUARE_COUNT],
    pub(crate) side_to_move: Color,
    pub(crate) continuation: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: Black on 1-12, Red on 21-32, Black to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            match sq.number() {
                1..=12 => board.set_piece(sq, Some(Piece::man(Color::Black))),
                21..=32 => board.set_piece(sq, Some(Piece::man(Color::Red))),
                _ => {}
            }
        }
        board
    }

    /// An empty board with Black to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARE_COUNT],
            side_to_move: Color::Black,
            continuation: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The piece that must keep capturing before the turn passes, if any.
    #[inline]
    #[must_use]
    pub fn continuation(&self) -> Option<Square> {
        self.continuation
    }

    /// All occupied squares of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color == color)
                .map(|piece| (sq, piece))
        })
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// The game ends when the side to move has no legal move.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.is_game_over()
            .then_some(self.side_to_move.opponent())
    }
}

impl fmt::Display for Board {
    /// Diagram with row 0 (squares 1-4) at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8i8 {
            for col in 0..8i8 {
                let c = match Square::from_coords(row, col) {
                    Some(sq) => self.piece_at(sq).map_or('.', Piece::to_char),
                    None => ' ',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}
