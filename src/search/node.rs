//! Scored branches of the search tree and their ordering.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{AppliedMove, Color};

use super::params::Lookahead;

/// One scored branch.
///
/// `score` covers this move alone; descendants contribute only through the
/// sort key (see [`SearchNode::key`]). Nodes are never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchNode {
    pub mv: AppliedMove,
    /// The position after this move ends the game.
    pub terminal: bool,
    /// Best continuation one ply deeper.
    pub child: Option<Box<SearchNode>>,
    pub score: i32,
    pub mover: Color,
    /// Remaining depth budget when this node was produced.
    pub depth: u32,
    /// The mover must capture again after this move.
    pub is_required: bool,
}

impl SearchNode {
    /// Sort key under the given lookahead.
    #[must_use]
    pub fn key(&self, lookahead: Lookahead) -> i64 {
        let own = i64::from(self.score);
        match (&self.child, lookahead) {
            (None, _) => own,
            (Some(child), Lookahead::Immediate) => own + i64::from(child.score),
            (Some(child), Lookahead::Subtree) => own + child.key(Lookahead::Subtree),
        }
    }

    /// Number of plies along the best line starting at this node.
    #[must_use]
    pub fn line_len(&self) -> usize {
        1 + self.child.as_ref().map_or(0, |c| c.line_len())
    }
}

/// Order two sibling nodes, best first.
///
/// Terminal nodes come before non-terminal ones, then forced continuations
/// before free moves, then higher keys first. Anything else is a tie.
#[must_use]
pub fn compare_nodes(a: &SearchNode, b: &SearchNode, lookahead: Lookahead) -> Ordering {
    b.terminal
        .cmp(&a.terminal)
        .then_with(|| b.is_required.cmp(&a.is_required))
        .then_with(|| b.key(lookahead).cmp(&a.key(lookahead)))
}

/// Stable sort, best first. Ties keep their incoming order.
pub fn sort_nodes(nodes: &mut [SearchNode], lookahead: Lookahead) {
    nodes.sort_by(|a, b| compare_nodes(a, b, lookahead));
}
