//! Turning a sorted candidate list into the moves to play.

use crate::board::{AppliedMove, Color};

use super::node::SearchNode;

/// The best root move followed by the captures the active player is forced
/// to continue with.
///
/// The walk follows child links while the current node obliges its mover
/// to capture again and the child is played by `active`. Empty input gives
/// an empty line.
#[must_use]
pub fn principal_line(candidates: &[SearchNode], active: Color) -> Vec<AppliedMove> {
    let Some(mut node) = candidates.first() else {
        return Vec::new();
    };

    let mut line = vec![node.mv];
    while node.is_required {
        let Some(child) = node.child.as_deref() else {
            break;
        };
        if child.mover != active {
            break;
        }
        line.push(child.mv);
        node = child;
    }
    line
}
