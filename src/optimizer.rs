//! Bounded exact re-ordering of a fixed stop set.
//!
//! Exhaustively enumerates every visiting order of the already-selected
//! stops and keeps the one with the smallest total of consecutive walking
//! times. Exhaustive search is acceptable only because the selector caps
//! stops at [`MAX_STOPS`](crate::selector::MAX_STOPS); raise that cap and
//! this should become nearest-neighbour plus 2-opt behind the same
//! interface.
//!
//! The optimizer is purely about order: it never adds or drops a stop.

use rayon::prelude::*;
use tracing::debug;

use crate::itinerary::Stop;
use crate::matrix::TravelTimeMatrix;

/// Finite stand-in for an unknown edge inside permutation arithmetic, so
/// orders avoiding that edge still rank comparably.
const UNREACHABLE_EDGE_COST: u64 = 1_000_000_000;

/// Outcome of a re-ordering pass.
#[derive(Debug, Clone)]
pub struct ReorderResult {
    /// The stops, in the minimizing order.
    pub stops: Vec<Stop>,
    /// Whether the order differs from the input order.
    pub changed: bool,
}

/// Re-orders `stops` to minimize total consecutive walking time.
///
/// `matrix` must be indexed by `stops` in their current order. With one
/// stop or none there is nothing to search and the input comes back with
/// `changed = false`.
///
/// # Panics
///
/// Panics if the matrix dimension does not match the stop count.
pub fn reorder_stops(stops: Vec<Stop>, matrix: &TravelTimeMatrix) -> ReorderResult {
    assert_eq!(
        matrix.len(),
        stops.len(),
        "matrix must be indexed by the given stops"
    );

    let order = optimal_order(matrix);
    let changed = order.iter().enumerate().any(|(position, &idx)| idx != position);
    if !changed {
        return ReorderResult {
            stops,
            changed: false,
        };
    }

    debug!(?order, "re-ordered stops for shorter walk");
    let stops = order.iter().map(|&idx| stops[idx].clone()).collect();
    ReorderResult {
        stops,
        changed: true,
    }
}

/// The visiting order of `0..n` minimizing the sum of consecutive edge
/// weights in `matrix`.
///
/// Enumeration is deterministic: permutations are visited branch-major by
/// first stop, then in ascending index order, and ties keep the order
/// visited first. Each first-stop branch is scored in parallel.
pub fn optimal_order(matrix: &TravelTimeMatrix) -> Vec<usize> {
    let n = matrix.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let best = (0..n)
        .into_par_iter()
        .map(|first| {
            let mut branch_best: Option<(u64, Vec<usize>)> = None;
            let mut sequence = Vec::with_capacity(n);
            sequence.push(first);
            extend_order(matrix, n, &mut sequence, 1 << first, 0, &mut branch_best);
            (first, branch_best)
        })
        // Equal totals resolve to the earliest branch, matching sequential
        // enumeration order.
        .min_by_key(|(first, branch_best)| {
            let total = branch_best.as_ref().map_or(u64::MAX, |(total, _)| *total);
            (total, *first)
        });

    match best.and_then(|(_, branch_best)| branch_best) {
        Some((total, order)) => {
            debug!(total, "optimal order found");
            order
        }
        // Unreachable for n >= 2, but identity is the safe answer.
        None => (0..n).collect(),
    }
}

/// Depth-first enumeration of completions of `sequence`, keeping the best
/// total seen. Candidates are tried in ascending index order and only a
/// strictly smaller total replaces the incumbent, so the first-visited
/// permutation wins ties.
fn extend_order(
    matrix: &TravelTimeMatrix,
    n: usize,
    sequence: &mut Vec<usize>,
    visited: u32,
    total: u64,
    best: &mut Option<(u64, Vec<usize>)>,
) {
    if sequence.len() == n {
        if best.as_ref().is_none_or(|(best_total, _)| total < *best_total) {
            *best = Some((total, sequence.clone()));
        }
        return;
    }

    let current = sequence[sequence.len() - 1];
    for next in 0..n {
        if visited & (1 << next) != 0 {
            continue;
        }
        let edge = matrix
            .minutes_between(current, next)
            .map_or(UNREACHABLE_EDGE_COST, u64::from);
        sequence.push(next);
        extend_order(matrix, n, sequence, visited | (1 << next), total + edge, best);
        sequence.pop();
    }
}
