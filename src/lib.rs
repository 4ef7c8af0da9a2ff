#[macro_use]
mod logging;

pub mod board;
pub mod search;

pub use board::{AppliedMove, Board, Color, Move, Piece, PieceKind, Square};
pub use search::{search, GameState, SearchConfig, SearchEngine, SearchNode, SearchResult};
