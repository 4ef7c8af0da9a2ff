//! Search module tests.
//!
//! - `evaluate.rs` - Per-move heuristic scores
//! - `ordering.rs` - Sibling comparator and sort keys
//! - `expand.rs` - Branch expansion and the engine facade
//! - `extract.rs` - Forced-line extraction
//! - `parallel.rs` - Root-level parallel expansion
//! - `proptest.rs` - Property-based tests over random positions

mod evaluate;

use rand::prelude::*;

use crate::board::{
    AppliedMove, Board, Color, Move, MoveClass, MoveError, Piece, PieceKind, Square,
};
use crate::search::{GameState, SearchNode};

pub(super) fn sq(number: u8) -> Square {
    Square::new(number).unwrap()
}

pub(super) fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).unwrap()
}

pub(super) fn applied(from: u8, to: u8, kind: PieceKind, class: MoveClass) -> AppliedMove {
    AppliedMove {
        from: sq(from),
        to: sq(to),
        piece: Piece::new(Color::Red, kind),
        class,
        promoted: false,
        captured: None,
    }
}

/// A leaf node with the given ordering attributes.
pub(super) fn node(score: i32, terminal: bool, is_required: bool) -> SearchNode {
    SearchNode {
        mv: applied(22, 18, PieceKind::Man, MoveClass::Slide),
        terminal,
        child: None,
        score,
        mover: Color::Red,
        depth: 0,
        is_required,
    }
}

pub(super) fn with_child(mut parent: SearchNode, child: SearchNode) -> SearchNode {
    parent.child = Some(Box::new(child));
    parent
}

/// Play `plies` random legal moves from the start position.
pub(super) fn random_position(seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.apply_move(mv.from(), mv.to()).unwrap();
    }
    board
}

/// A board that also advertises one move it will refuse to apply.
#[derive(Clone)]
pub(super) struct PhantomMove {
    pub board: Board,
    pub phantom: Move,
}

impl GameState for PhantomMove {
    fn turn(&self) -> Color {
        self.board.turn()
    }

    fn moves(&self) -> Vec<Move> {
        let mut moves = self.board.moves();
        moves.insert(0, self.phantom);
        moves
    }

    fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        GameState::apply_move(&mut self.board, from, to)
    }

    fn is_game_over(&self) -> bool {
        GameState::is_game_over(&self.board)
    }
}
