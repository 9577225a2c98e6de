//! Single-source shortest paths: Dijkstra, Bellman-Ford and A*.
//!
//! All three share the [`SearchTree`] result shape and interpret edge weights
//! only through a [`CostAlgebra`], so one implementation serves integer
//! distances, float distances, or custom multi-field weights.
//!
//! The priority-queue frontier ([`MinHeap`]) has no decrease-key: an improved
//! vertex is re-pushed and stale entries are skipped when popped (lazy
//! deletion). Among equal tentative costs the pop order is arbitrary but
//! deterministic.

use crate::collections::MinHeap;
use crate::cost::CostAlgebra;
use crate::graph::dense::DenseGraph;
use crate::graph::search_tree::SearchTree;

/// A negative cycle reachable from the start vertex, detected by
/// [`bellman_ford`]'s final relaxation pass.
///
/// A table computed over such a graph would be silently wrong (some costs can
/// be driven down without bound), so the condition is reported instead of a
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("negative cycle reachable from vertex {start}")]
pub struct NegativeCycle {
    /// The start vertex the search ran from.
    pub start: usize,
}

/// Dijkstra's algorithm: single-source shortest paths over non-negative
/// weights.
///
/// All edge costs must compare `>= algebra.zero()`; negative weights are not
/// detected and yield meaningless results (use [`bellman_ford`] for those).
/// If `end` is given the search stops as soon as `end` is settled, leaving
/// later vertices possibly unreached.
///
/// Returns a table with `cost[v]` equal to the shortest-path distance from
/// `start` (the algebra's `infinity` for unreachable vertices) and
/// `previous[v]` the predecessor on one such shortest path.
///
/// # Panics
/// Panics if `start` or `end` is out of range.
pub fn dijkstra<V, E, A, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    algebra: &A,
    start: usize,
    end: Option<usize>,
) -> SearchTree<E>
where
    E: Clone,
    A: CostAlgebra<Cost = E>,
{
    let len = graph.len();
    assert!(start < len, "start vertex {start} out of bounds for length {len}");
    if let Some(end) = end {
        assert!(end < len, "end vertex {end} out of bounds for length {len}");
    }

    let mut tree = SearchTree::rooted(start, len, algebra.infinity());
    tree.record_cost(start, algebra.zero());

    let mut settled = vec![false; len];
    let mut frontier = MinHeap::new(|a: &E, b: &E| algebra.compare(a, b));
    frontier.push(algebra.zero(), start);

    while let Some((_, u)) = frontier.pop() {
        if settled[u] {
            // Stale entry from a superseded re-push.
            continue;
        }
        settled[u] = true;
        if end == Some(u) {
            break;
        }

        for (v, weight) in graph.neighbors(u) {
            let candidate = algebra.add(tree.cost(u), weight);
            if algebra.less(&candidate, tree.cost(v)) {
                #[cfg(feature = "tracing")]
                tracing::trace!(u, v, "dijkstra relaxation improved");
                tree.record(v, u, candidate.clone());
                frontier.push(candidate, v);
            }
        }
    }

    tree
}

/// Bellman-Ford: single-source shortest paths tolerating negative weights.
///
/// Performs `len - 1` relaxation passes over all edges in row-major order
/// (stopping earlier once a pass changes nothing), then one detection pass;
/// if that pass still finds an improving relaxation, a negative cycle is
/// reachable from `start` and `Err(NegativeCycle)` is returned.
///
/// There is no early `end` cutoff; the full table is computed.
///
/// # Panics
/// Panics if `start` is out of range.
pub fn bellman_ford<V, E, A, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    algebra: &A,
    start: usize,
) -> Result<SearchTree<E>, NegativeCycle>
where
    E: Clone,
    A: CostAlgebra<Cost = E>,
{
    let len = graph.len();
    assert!(start < len, "start vertex {start} out of bounds for length {len}");

    let mut tree = SearchTree::rooted(start, len, algebra.infinity());
    tree.record_cost(start, algebra.zero());
    let infinity = algebra.infinity();

    for _pass in 1..len {
        let mut changed = false;
        for (u, v, weight) in graph.edges() {
            // Never relax out of an unreached vertex; with negative weights
            // `infinity + w` could otherwise leak a finite-looking cost.
            if algebra.compare(tree.cost(u), &infinity) == core::cmp::Ordering::Equal {
                continue;
            }
            let candidate = algebra.add(tree.cost(u), weight);
            if algebra.less(&candidate, tree.cost(v)) {
                tree.record(v, u, candidate);
                changed = true;
            }
        }
        if !changed {
            #[cfg(feature = "tracing")]
            tracing::debug!(pass = _pass, "bellman-ford converged early");
            break;
        }
    }

    // Detection pass: any remaining improvement means a negative cycle.
    for (u, v, weight) in graph.edges() {
        if algebra.compare(tree.cost(u), &infinity) == core::cmp::Ordering::Equal {
            continue;
        }
        let candidate = algebra.add(tree.cost(u), weight);
        if algebra.less(&candidate, tree.cost(v)) {
            return Err(NegativeCycle { start });
        }
    }

    Ok(tree)
}

/// A* search: single-pair shortest path guided by a heuristic.
///
/// Works like [`dijkstra`] except the frontier is keyed by
/// `combine(&cost[v], &heuristic(v))` instead of the bare tentative cost.
/// `combine` is deliberately distinct from the algebra's `add` so heuristic
/// values of a different representation `H` can be folded into the key.
///
/// The heuristic must be admissible (never overestimate the true remaining
/// cost to `end`) for the result to be optimal; this is a caller obligation
/// and is not checked. With `heuristic = |_| zero` and `combine = add`, A*
/// reduces exactly to Dijkstra.
///
/// # Panics
/// Panics if `start` or `end` is out of range.
pub fn astar<V, E, A, H, Heur, Combine, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    algebra: &A,
    start: usize,
    end: usize,
    heuristic: Heur,
    combine: Combine,
) -> SearchTree<E>
where
    E: Clone,
    A: CostAlgebra<Cost = E>,
    Heur: Fn(usize) -> H,
    Combine: Fn(&E, &H) -> E,
{
    let len = graph.len();
    assert!(start < len, "start vertex {start} out of bounds for length {len}");
    assert!(end < len, "end vertex {end} out of bounds for length {len}");

    let mut tree = SearchTree::rooted(start, len, algebra.infinity());
    tree.record_cost(start, algebra.zero());

    let mut settled = vec![false; len];
    let mut frontier = MinHeap::new(|a: &E, b: &E| algebra.compare(a, b));
    frontier.push(combine(&algebra.zero(), &heuristic(start)), start);

    while let Some((_, u)) = frontier.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        if u == end {
            break;
        }

        for (v, weight) in graph.neighbors(u) {
            let candidate = algebra.add(tree.cost(u), weight);
            if algebra.less(&candidate, tree.cost(v)) {
                let key = combine(&candidate, &heuristic(v));
                tree.record(v, u, candidate);
                frontier.push(key, v);
            }
        }
    }

    tree
}
