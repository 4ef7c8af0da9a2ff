//! Legal move generation with mandatory captures.

use super::tables::{directions_for, JUMPS, STEPS};
use super::{Board, Move, Square};

impl Board {
    /// Generate all legal moves for the side to move.
    ///
    /// Jumps are mandatory: when any jump exists only jumps are returned.
    /// During a multi-capture only the capturing piece's jumps are legal.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        if let Some(sq) = self.continuation {
            return self.jumps_from(sq);
        }

        let color = self.side_to_move;
        let jumps: Vec<Move> = self
            .pieces(color)
            .flat_map(|(sq, _)| self.jumps_from(sq))
            .collect();
        if !jumps.is_empty() {
            return jumps;
        }

        self.pieces(color)
            .flat_map(|(sq, _)| self.steps_from(sq))
            .collect()
    }

    pub(crate) fn has_legal_move(&self) -> bool {
        if let Some(sq) = self.continuation {
            return !self.jumps_from(sq).is_empty();
        }
        self.pieces(self.side_to_move)
            .any(|(sq, _)| !self.jumps_from(sq).is_empty() || !self.steps_from(sq).is_empty())
    }

    /// Jumps available to the piece on `from`.
    pub(crate) fn jumps_from(&self, from: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        directions_for(piece)
            .filter_map(|dir| JUMPS[from.index()][dir])
            .filter(|&(over, land)| {
                self.piece_at(land).is_none()
                    && self
                        .piece_at(over)
                        .is_some_and(|victim| victim.color != piece.color)
            })
            .map(|(_, land)| Move::new(from, land))
            .collect()
    }

    fn steps_from(&self, from: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        directions_for(piece)
            .filter_map(|dir| STEPS[from.index()][dir])
            .filter(|&to| self.piece_at(to).is_none())
            .map(|to| Move::new(from, to))
            .collect()
    }

    /// Count leaf nodes of the legal move tree, one ply per applied move.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        self.generate_moves()
            .into_iter()
            .map(|mv| {
                let mut next = self.clone();
                match next.apply_move(mv.from(), mv.to()) {
                    Ok(_) => next.perft(depth - 1),
                    Err(_) => 0,
                }
            })
            .sum()
    }
}
