//! Minimum spanning trees: Prim and Kruskal.
//!
//! Both treat the directed matrix as an undirected graph: an edge between
//! `u` and `v` is whichever of `(u, v)` / `(v, u)` cells is occupied (both
//! may be, e.g. a symmetric matrix; each occupied cell is considered on its
//! own, so asymmetric weights simply offer two candidate edges).
//!
//! In the returned [`SearchTree`], `previous[v]` is `v`'s parent in the tree
//! and `cost[v]` is the weight of the edge connecting `v` to its parent —
//! *not* a cumulative path cost. Roots carry `cost = zero`, so summing
//! `cost[v]` over reached vertices gives the tree (or forest) weight.

use crate::collections::{DisjointSet, MinHeap};
use crate::cost::CostAlgebra;
use crate::graph::dense::DenseGraph;
use crate::graph::search_tree::SearchTree;

/// Prim's algorithm: grows one minimum spanning tree from `start`.
///
/// Repeatedly pulls the cheapest edge connecting a tree vertex to a non-tree
/// vertex from a min-heap frontier. Vertices not connected to `start` stay
/// out of the tree (`previous = None`, `cost = infinity`).
///
/// # Panics
/// Panics if `start` is out of range.
pub fn prim<V, E, A, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    algebra: &A,
    start: usize,
) -> SearchTree<E>
where
    E: Clone,
    A: CostAlgebra<Cost = E>,
{
    let len = graph.len();
    assert!(start < len, "start vertex {start} out of bounds for length {len}");

    let mut tree = SearchTree::rooted(start, len, algebra.infinity());
    tree.record_cost(start, algebra.zero());

    let mut in_tree = vec![false; len];
    let mut frontier = MinHeap::new(|a: &E, b: &E| algebra.compare(a, b));
    frontier.push(algebra.zero(), start);

    while let Some((_, u)) = frontier.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        // Offer every undirected edge leaving `u` to the frontier.
        for v in 0..len {
            if in_tree[v] {
                continue;
            }
            for weight in [graph.edge(u, v), graph.edge(v, u)].into_iter().flatten() {
                if algebra.less(weight, tree.cost(v)) {
                    tree.record(v, u, weight.clone());
                    frontier.push(weight.clone(), v);
                }
            }
        }
    }

    tree
}

/// Kruskal's algorithm: builds a minimum spanning forest.
///
/// Collects every matrix edge, sorts ascending by weight, and accepts each
/// edge whose endpoints lie in different components (tracked by a
/// [`DisjointSet`]); accepted edges union the components, cycle-closing edges
/// are skipped. On a disconnected graph the result is a forest, with one root
/// per component — not flagged differently from a tree.
///
/// The returned table has no start vertex ([`SearchTree::start`] is `None`).
pub fn kruskal<V, E, A, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    algebra: &A,
) -> SearchTree<E>
where
    E: Clone,
    A: CostAlgebra<Cost = E>,
{
    let len = graph.len();

    let mut records: Vec<(usize, usize, E)> = graph
        .edges()
        .map(|(u, v, w)| (u, v, w.clone()))
        .collect();
    records.sort_unstable_by(|a, b| algebra.compare(&a.2, &b.2));

    let mut components = DisjointSet::with_capacity(len);
    for _ in 0..len {
        components.make_set();
    }

    let mut previous: Vec<Option<usize>> = vec![None; len];
    let mut cost: Vec<E> = vec![algebra.zero(); len];

    for (u, v, weight) in records {
        if u == v {
            // A self-loop can never join two components.
            continue;
        }
        if !components.union(u, v) {
            continue;
        }
        // Re-root v's component at v so it can take u as its parent without
        // clobbering an edge already recorded on v.
        reroot(&mut previous, &mut cost, v, algebra);
        previous[v] = Some(u);
        cost[v] = weight;
    }

    SearchTree::forest(previous, cost)
}

/// Reverses the parent chain from `v` to its component root, making `v` the
/// root. Each flipped edge keeps its weight, now recorded on the former
/// parent.
fn reroot<E, A>(previous: &mut [Option<usize>], cost: &mut [E], v: usize, algebra: &A)
where
    E: Clone,
    A: CostAlgebra<Cost = E>,
{
    let mut child = v;
    let mut parent = previous[v];
    let mut carried = cost[v].clone();
    previous[v] = None;
    cost[v] = algebra.zero();

    while let Some(p) = parent {
        let next_parent = previous[p];
        let next_carried = cost[p].clone();
        previous[p] = Some(child);
        cost[p] = carried;
        child = p;
        parent = next_parent;
        carried = next_carried;
    }
}
