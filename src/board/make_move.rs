use super::error::{MoveError, MoveParseError};
use super::tables::{is_crowning_square, jump_between};
use super::{AppliedMove, Board, Move, MoveClass, Piece, PieceKind, Square};

impl Board {
    /// Apply a move for the side to move.
    ///
    /// On success the board is updated and a record of the executed move is
    /// returned. After a jump the same side stays on move if the capturing
    /// piece can jump again; crowning always ends the turn. On error the
    /// board is unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        let mv = Move::new(from, to);
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide { square: from });
        }
        if let Some(pending) = self.continuation {
            if pending != from {
                return Err(MoveError::MustContinue { square: pending });
            }
        }
        if !self.generate_moves().contains(&mv) {
            return Err(MoveError::IllegalMove { mv });
        }

        let captured = if mv.is_jump() {
            let over = jump_between(from, to).ok_or(MoveError::IllegalMove { mv })?;
            let victim = self
                .piece_at(over)
                .ok_or(MoveError::IllegalMove { mv })?;
            self.set_piece(over, None);
            Some((over, victim))
        } else {
            None
        };

        let promoted = !piece.is_king() && is_crowning_square(to, piece.color);
        let landed = if promoted {
            Piece::new(piece.color, PieceKind::King)
        } else {
            piece
        };
        self.set_piece(from, None);
        self.set_piece(to, Some(landed));

        let class = if captured.is_some() {
            MoveClass::Jump
        } else {
            MoveClass::Slide
        };

        self.continuation = None;
        if class == MoveClass::Jump && !promoted && !self.jumps_from(to).is_empty() {
            self.continuation = Some(to);
        } else {
            self.side_to_move = self.side_to_move.opponent();
        }

        Ok(AppliedMove {
            from,
            to,
            piece,
            class,
            promoted,
            captured,
        })
    }

    /// Parse a move in `11-15` / `22x15` notation and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use checkers_engine::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.apply_notation("11-15").unwrap();
    /// board.apply_notation("23-19").unwrap();
    /// ```
    pub fn apply_notation(&mut self, notation: &str) -> Result<AppliedMove, MoveParseError> {
        let mv: Move = notation.parse()?;
        self.apply_move(mv.from(), mv.to())
            .map_err(|_| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}
