//! Depth-first branch expansion.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::{Color, Move};

use super::evaluate::{is_forced_continuation, score_move};
use super::game::GameState;
use super::node::{sort_nodes, SearchNode};
use super::params::{Lookahead, ScoreWeights};

/// Per-search settings shared by every level of the recursion.
#[derive(Clone, Copy)]
pub(crate) struct SearchContext<'a> {
    /// The side the top-level search plays for; fixes every score's sign.
    pub active: Color,
    pub lookahead: Lookahead,
    pub weights: &'a ScoreWeights,
    pub expansions: &'a AtomicU64,
}

/// Expand every legal move of `state`, best first.
///
/// Each move is tried on its own copy of `state`; `state` itself is never
/// modified. Moves the state refuses to apply are dropped.
pub(crate) fn expand<S: GameState>(ctx: &SearchContext<'_>, state: &S, depth: u32) -> Vec<SearchNode> {
    ctx.expansions.fetch_add(1, Ordering::Relaxed);
    let moves = state.moves();
    trace!("expanding {} moves at depth {depth}", moves.len());

    let mut nodes: Vec<SearchNode> = moves
        .into_iter()
        .filter_map(|mv| expand_move(ctx, state, mv, depth))
        .collect();
    sort_nodes(&mut nodes, ctx.lookahead);
    nodes
}

/// Build the node for one move, recursing into its best continuation.
pub(crate) fn expand_move<S: GameState>(
    ctx: &SearchContext<'_>,
    state: &S,
    mv: Move,
    depth: u32,
) -> Option<SearchNode> {
    let mut branch = state.clone();
    let mover = branch.turn();
    let applied = match branch.apply_move(mv.from(), mv.to()) {
        Ok(applied) => applied,
        Err(err) => {
            debug!("skipping move {mv}: {err}");
            return None;
        }
    };

    let terminal = branch.is_game_over();
    let score = score_move(&applied, mover, ctx.active, terminal, depth, ctx.weights);
    let is_required = is_forced_continuation(&applied, mover, branch.turn());

    let child = if !terminal && depth > 0 {
        expand(ctx, &branch, depth - 1)
            .into_iter()
            .next()
            .map(Box::new)
    } else {
        None
    };

    Some(SearchNode {
        mv: applied,
        terminal,
        child,
        score,
        mover,
        depth,
        is_required,
    })
}
