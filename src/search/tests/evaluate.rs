//! Move evaluator tests.

use super::applied;
use crate::board::{Color, MoveClass, PieceKind};
use crate::search::{is_forced_continuation, score_move, ScoreWeights};

fn score(kind: PieceKind, class: MoveClass, promoted: bool, own: bool, game_over: bool, depth: u32) -> i32 {
    let mut mv = applied(10, 1, kind, class);
    mv.promoted = promoted;
    let mover = if own { Color::Red } else { Color::Black };
    score_move(&mv, mover, Color::Red, game_over, depth, &ScoreWeights::default())
}

#[test]
fn slide_scores() {
    assert_eq!(score(PieceKind::Man, MoveClass::Slide, false, true, false, 0), 2);
    assert_eq!(score(PieceKind::King, MoveClass::Slide, false, true, false, 0), 1);
}

#[test]
fn jump_scores() {
    assert_eq!(score(PieceKind::Man, MoveClass::Jump, false, true, false, 0), 10);
    assert_eq!(score(PieceKind::King, MoveClass::Jump, false, true, false, 0), 20);
}

#[test]
fn promoting_capture_at_depth_one() {
    assert_eq!(score(PieceKind::Man, MoveClass::Jump, true, true, false, 1), 59);
}

#[test]
fn promotion_bonus_by_kind() {
    assert_eq!(score(PieceKind::Man, MoveClass::Slide, true, true, false, 0), 52);
    assert_eq!(score(PieceKind::King, MoveClass::Slide, true, true, false, 0), 61);
}

#[test]
fn opponent_moves_count_against() {
    assert_eq!(score(PieceKind::Man, MoveClass::Jump, false, false, false, 0), -10);
    assert_eq!(score(PieceKind::King, MoveClass::Slide, false, false, false, 2), -3);
}

#[test]
fn game_over_dominates() {
    assert_eq!(score(PieceKind::Man, MoveClass::Slide, false, true, true, 0), 1002);
    assert_eq!(score(PieceKind::Man, MoveClass::Jump, false, false, true, 1), -1011);
}

#[test]
fn depth_is_subtracted() {
    let shallow = score(PieceKind::Man, MoveClass::Slide, false, true, false, 1);
    let deep = score(PieceKind::Man, MoveClass::Slide, false, true, false, 4);
    assert_eq!(shallow - deep, 3);
}

#[test]
fn custom_weights() {
    let weights = ScoreWeights {
        game_over: 5,
        ..ScoreWeights::default()
    };
    let mv = applied(10, 1, PieceKind::Man, MoveClass::Slide);
    assert_eq!(score_move(&mv, Color::Red, Color::Red, true, 0, &weights), 7);
}

#[test]
fn forced_continuation_needs_jump_and_same_mover() {
    let jump = applied(26, 17, PieceKind::Man, MoveClass::Jump);
    let slide = applied(22, 18, PieceKind::Man, MoveClass::Slide);
    assert!(is_forced_continuation(&jump, Color::Red, Color::Red));
    assert!(!is_forced_continuation(&jump, Color::Red, Color::Black));
    assert!(!is_forced_continuation(&slide, Color::Red, Color::Red));
}
