//! Move selection by exhaustive depth-limited expansion.
//!
//! Features:
//! - Plain depth-first recursion over owned state copies (no pruning, no
//!   transposition table)
//! - Per-move heuristic scores signed from the searching side's view
//! - Sibling ordering: terminal, then forced continuation, then score
//! - Forced multi-capture chains returned together with the chosen move
//! - Optional root-level parallelism with deterministic results

mod evaluate;
mod expand;
mod extract;
mod game;
mod node;
mod parallel;
mod params;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::board::{AppliedMove, Color, Move};

use expand::SearchContext;

pub use evaluate::{is_forced_continuation, score_move};
pub use extract::principal_line;
pub use game::GameState;
pub use node::{compare_nodes, sort_nodes, SearchNode};
pub use params::{
    Lookahead, PieceWeight, ScoreWeights, SearchConfig, SearchInfo, SearchInfoCallback,
};

/// Outcome of one top-level search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move followed by any captures it forces; empty when the
    /// position has no legal move.
    pub line: Vec<AppliedMove>,
    /// Root candidates, best first.
    pub candidates: Vec<SearchNode>,
    /// Number of expansion calls made.
    pub expansions: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// The first move to play, if any.
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.line.first().map(AppliedMove::as_move)
    }

    /// The selected line as plain move requests.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.line.iter().map(AppliedMove::as_move).collect()
    }
}

/// Search driver holding the configuration and diagnostic counters.
pub struct SearchEngine {
    config: SearchConfig,
    expansions: AtomicU64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        SearchEngine {
            config,
            expansions: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Expansion calls made since the last `run` started.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.expansions.load(Ordering::Relaxed)
    }

    /// Score and order every legal move of `state` on behalf of its side to
    /// move, exploring `depth` further plies below each.
    ///
    /// The returned candidates are sorted best first. `state` is not modified.
    pub fn expand<S: GameState>(&self, state: &S, depth: u32) -> Vec<SearchNode> {
        self.expand_for(state, state.turn(), depth)
    }

    fn expand_for<S: GameState>(&self, state: &S, active: Color, depth: u32) -> Vec<SearchNode> {
        let ctx = SearchContext {
            active,
            lookahead: self.config.lookahead,
            weights: &self.config.weights,
            expansions: &self.expansions,
        };
        parallel::expand_root(&ctx, state, depth, self.config.threads)
    }

    /// Run a full search from `state` with the configured depth.
    pub fn run<S: GameState>(&self, state: &S) -> SearchResult {
        let start = Instant::now();
        self.expansions.store(0, Ordering::Relaxed);

        let root = state.clone();
        let active = root.turn();
        let depth = self.config.depth;
        let candidates = self.expand_for(&root, active, depth);
        let line = principal_line(&candidates, active);

        let expansions = self.expansions();
        let time_ms = start.elapsed().as_millis() as u64;
        let line_text = line
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        if line.is_empty() {
            info!("no legal move for {active} at depth {depth}");
        } else {
            info!(
                "search depth {depth} for {active}: {line_text} ({} candidates, {expansions} expansions, {time_ms} ms)",
                candidates.len()
            );
        }

        if let Some(callback) = &self.config.info_callback {
            callback(&SearchInfo {
                depth,
                expansions,
                candidates: candidates.len(),
                time_ms,
                line: line_text,
            });
        }

        SearchResult {
            line,
            candidates,
            expansions,
            time_ms,
        }
    }
}

/// Pick the move to play from `state`, searching `depth` plies below it.
///
/// Returns the chosen move followed by any captures the same side is forced
/// to continue with, or an empty list when there is no legal move.
///
/// # Example
/// ```
/// use checkers_engine::board::Board;
/// use checkers_engine::search::search;
///
/// let board = Board::new();
/// let line = search(&board, 2);
/// assert!(!line.is_empty());
/// assert!(board.generate_moves().contains(&line[0].as_move()));
/// ```
pub fn search<S: GameState>(state: &S, depth: u32) -> Vec<AppliedMove> {
    SearchEngine::new(SearchConfig::with_depth(depth))
        .run(state)
        .line
}
