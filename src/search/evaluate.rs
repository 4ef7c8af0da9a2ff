//! Heuristic score of a single applied move.

use crate::board::{AppliedMove, Color, MoveClass};

use super::params::ScoreWeights;

/// Score one applied move.
///
/// Every term is added when `mover` is the `active` player and subtracted
/// otherwise; the remaining `depth` is then subtracted so that equal gains
/// reached sooner score higher.
#[must_use]
pub fn score_move(
    applied: &AppliedMove,
    mover: Color,
    active: Color,
    game_over: bool,
    depth: u32,
    weights: &ScoreWeights,
) -> i32 {
    let king = applied.piece.is_king();
    let mut delta = match applied.class {
        MoveClass::Slide => weights.slide.pick(king),
        MoveClass::Jump => weights.jump.pick(king),
    };
    if applied.promoted {
        delta += weights.promotion.pick(king);
    }
    if game_over {
        delta += weights.game_over;
    }

    let signed = if mover == active { delta } else { -delta };
    signed.saturating_sub(i32::try_from(depth).unwrap_or(i32::MAX))
}

/// A jump after which the mover is still on turn must be followed by
/// another capture from the same piece.
#[inline]
#[must_use]
pub fn is_forced_continuation(applied: &AppliedMove, mover: Color, turn_after: Color) -> bool {
    applied.is_jump() && turn_after == mover
}
