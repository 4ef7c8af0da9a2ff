//! Root-level sibling expansion on worker threads.
//!
//! Every root move is an independent subtree with its own state copy, so
//! workers pull move indices from a shared counter and expand them without
//! coordinating. Results are put back into move-generation order before the
//! final sort, which makes the outcome identical to a sequential search.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use crate::board::Move;

use super::expand::{expand, expand_move, SearchContext};
use super::game::GameState;
use super::node::{sort_nodes, SearchNode};

/// Worker stack size (deep searches recurse once per ply)
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Expand the root with up to `threads` threads, the caller included.
pub(crate) fn expand_root<S: GameState>(
    ctx: &SearchContext<'_>,
    state: &S,
    depth: u32,
    threads: usize,
) -> Vec<SearchNode> {
    let moves = state.moves();
    if threads <= 1 || moves.len() < 2 {
        return expand(ctx, state, depth);
    }

    ctx.expansions.fetch_add(1, Ordering::Relaxed);
    let workers = threads.min(moves.len());
    debug!("expanding {} root moves on {workers} threads", moves.len());

    let next = AtomicUsize::new(0);
    let results: Mutex<Vec<(usize, SearchNode)>> = Mutex::new(Vec::with_capacity(moves.len()));

    thread::scope(|scope| {
        let (moves, next, results) = (&moves, &next, &results);
        for worker_id in 1..workers {
            let spawned = thread::Builder::new()
                .name(format!("expand-{worker_id}"))
                .stack_size(WORKER_STACK_SIZE)
                .spawn_scoped(scope, move || {
                    run_worker(ctx, state, moves, depth, next, results);
                });
            if let Err(err) = spawned {
                debug!("failed to spawn expansion worker {worker_id}: {err}");
            }
        }
        // The calling thread drains the queue too, so the work finishes even
        // if no worker could be spawned.
        run_worker(ctx, state, moves, depth, next, results);
    });

    let mut indexed = results.into_inner();
    indexed.sort_by_key(|&(idx, _)| idx);
    let mut nodes: Vec<SearchNode> = indexed.into_iter().map(|(_, node)| node).collect();
    sort_nodes(&mut nodes, ctx.lookahead);
    nodes
}

fn run_worker<S: GameState>(
    ctx: &SearchContext<'_>,
    state: &S,
    moves: &[Move],
    depth: u32,
    next: &AtomicUsize,
    results: &Mutex<Vec<(usize, SearchNode)>>,
) {
    loop {
        let idx = next.fetch_add(1, Ordering::Relaxed);
        let Some(&mv) = moves.get(idx) else {
            break;
        };
        if let Some(node) = expand_move(ctx, state, mv, depth) {
            results.lock().push((idx, node));
        }
    }
}
