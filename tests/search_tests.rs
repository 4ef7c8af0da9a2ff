//! Search tests to verify the engine picks sensible moves through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use checkers_engine::board::prelude::*;
use checkers_engine::search::{Lookahead, SearchInfo};

fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).expect("valid position")
}

fn notation(line: &[AppliedMove]) -> Vec<String> {
    line.iter().map(ToString::to_string).collect()
}

/// The opening search returns a legal move for the side to move
#[test]
fn opening_move_is_legal() {
    let board = Board::new();
    let line = search(&board, 3);

    assert_eq!(line.len(), 1, "no captures are possible in the opening");
    assert_eq!(line[0].piece.color, Color::Black);
    assert!(board.generate_moves().contains(&line[0].as_move()));
}

/// The searched position is left untouched
#[test]
fn search_does_not_modify_input() {
    let board = board("R:R18,22,K30:B9,14,15");
    let before = board.clone();
    let _ = search(&board, 3);
    assert_eq!(board, before);
}

/// A mandatory capture that wins the game is taken
#[test]
fn takes_winning_capture() {
    let board = board("B:R18:B14");
    let line = search(&board, 2);
    assert_eq!(notation(&line), vec!["14x23"]);
}

/// Both halves of a double jump come back together
#[test]
fn returns_full_capture_chain() {
    let board = board("R:R26,32:B4,14,22");
    let line = search(&board, 3);
    assert_eq!(notation(&line), vec!["26x17", "17x10"]);

    // The chain can be replayed on the original position
    let mut replay = board.clone();
    for applied in &line {
        assert_eq!(replay.apply_move(applied.from, applied.to), Ok(*applied));
    }
    assert_eq!(replay.side_to_move(), Color::Black);
    assert_eq!(replay.piece_count(Color::Black), 1);
}

/// A crowning step outranks a plain slide
#[test]
fn prefers_crowning() {
    let board = board("B:RK1:B9,27");
    let line = search(&board, 2);
    assert_eq!(line.len(), 1);
    assert_eq!(line[0].from.number(), 27);
    assert!(line[0].promoted);
}

/// No legal move means nothing to play
#[test]
fn finished_game_yields_empty_line() {
    let board = board("R:R5:B1");
    assert!(search(&board, 3).is_empty());

    let result = SearchEngine::new(SearchConfig::with_depth(3)).run(&board);
    assert!(result.candidates.is_empty());
    assert_eq!(result.best_move(), None);
}

/// Thread count changes nothing but wall time
#[test]
fn parallel_search_agrees_with_sequential() {
    let board = board("B:R18,19,21,22,25,26,27,30:B1,2,5,6,9,11,14,15");
    let sequential = SearchEngine::new(SearchConfig::with_depth(3)).run(&board);
    let parallel = SearchEngine::new(SearchConfig::with_depth(3).threads(4)).run(&board);

    assert_eq!(parallel.line, sequential.line);
    assert_eq!(parallel.candidates, sequential.candidates);
}

/// The info callback fires once per run with the chosen line
#[test]
fn info_callback_reports_line() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let config = SearchConfig::with_depth(2)
        .lookahead(Lookahead::Subtree)
        .with_info_callback(Arc::new(move |info: &SearchInfo| {
            assert_eq!(info.depth, 2);
            assert!(info.expansions > 0);
            assert!(!info.line.is_empty());
            seen.fetch_add(1, Ordering::SeqCst);
        }));

    let result = SearchEngine::new(config).run(&Board::new());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(result.best_move().is_some());
}

/// Playing the engine against itself always makes legal moves
#[test]
fn self_play_stays_legal() {
    let mut board = Board::new();
    for _ in 0..60 {
        if board.is_game_over() {
            break;
        }
        let line = search(&board, 2);
        assert!(!line.is_empty());
        for applied in line {
            board
                .apply_move(applied.from, applied.to)
                .expect("searched move applies");
        }
    }
}
