//! `SearchTree` — the per-vertex `(previous, cost)` table every graph
//! algorithm returns.
//!
//! The table is a pair of parallel arrays indexed by vertex index:
//! `previous[v]` is the predecessor on the discovered tree (or `None` for
//! unreached vertices and roots) and `cost[v]` is the accumulated cost.
//! Unweighted traversals instantiate `SearchTree<()>`, so their cost array is
//! zero-sized and free.
//!
//! A table is created sized to its source graph, populated by one algorithm,
//! and returned by value; ownership makes it immutable to the algorithm
//! afterwards and drops it when the caller is done. It holds plain indices,
//! not borrows of the graph, so it outlives the graph or survives graph
//! mutation — but any vertex removal on the source graph invalidates the
//! meaning of its indices (swap-compaction reassigns them).

use crate::cost::CostAlgebra;
use crate::graph::dense::DenseGraph;

/// The predecessor/cost table produced by every graph algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree<C = ()> {
    start: Option<usize>,
    previous: Vec<Option<usize>>,
    cost: Vec<C>,
}

impl<C: Clone> SearchTree<C> {
    /// Creates a table of `len` vertices rooted at `start`, every slot
    /// initialized to "unreached" (`previous = None`, `cost = fill`).
    pub(crate) fn rooted(start: usize, len: usize, fill: C) -> Self {
        Self {
            start: Some(start),
            previous: vec![None; len],
            cost: vec![fill; len],
        }
    }

    /// Creates an unrooted table (a forest, as built by Kruskal).
    pub(crate) fn forest(previous: Vec<Option<usize>>, cost: Vec<C>) -> Self {
        debug_assert_eq!(previous.len(), cost.len());
        Self {
            start: None,
            previous,
            cost,
        }
    }

    /// Records `v`'s predecessor and accumulated cost.
    pub(crate) fn record(&mut self, v: usize, previous: usize, cost: C) {
        self.previous[v] = Some(previous);
        self.cost[v] = cost;
    }

    /// Overwrites `v`'s accumulated cost.
    pub(crate) fn record_cost(&mut self, v: usize, cost: C) {
        self.cost[v] = cost;
    }
}

impl<C> SearchTree<C> {
    /// Returns the number of vertex slots.
    pub fn len(&self) -> usize {
        self.previous.len()
    }

    /// Returns `true` if the table has no vertex slots.
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    /// Returns the root the algorithm started from, or `None` for forests.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Returns `v`'s predecessor in the tree, or `None` if `v` is a root or
    /// was not reached.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn previous(&self, v: usize) -> Option<usize> {
        assert!(v < self.previous.len(), "vertex {v} out of bounds for length {len}", len = self.previous.len());
        self.previous[v]
    }

    /// Returns `v`'s accumulated cost. For unreached vertices this is the
    /// algebra's `infinity`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn cost(&self, v: usize) -> &C {
        assert!(v < self.cost.len(), "vertex {v} out of bounds for length {len}", len = self.cost.len());
        &self.cost[v]
    }

    /// Returns `true` if `v` is in the tree (it has a predecessor or is the
    /// start vertex).
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn reached(&self, v: usize) -> bool {
        self.previous(v).is_some() || self.start == Some(v)
    }

    /// Walks the predecessor chain from `v` back to the root, yielding `v`
    /// first. Yields nothing if `v` was not reached.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn path_to(&self, v: usize) -> PathTo<'_, C> {
        let current = if self.reached(v) { Some(v) } else { None };
        PathTo {
            tree: self,
            current,
        }
    }

    /// Returns vertex indices ordered by ascending accumulated cost.
    ///
    /// Unreached vertices sort last (their cost is `infinity`). Ties keep
    /// index order.
    pub fn by_cost<A>(&self, algebra: &A) -> impl Iterator<Item = usize>
    where
        A: CostAlgebra<Cost = C>,
    {
        let mut order: Vec<usize> = (0..self.cost.len()).collect();
        order.sort_by(|&a, &b| algebra.compare(&self.cost[a], &self.cost[b]));
        order.into_iter()
    }

    /// Extracts the tree (or forest) edges into a new graph.
    ///
    /// Every vertex of `graph` is cloned into the result at the same index;
    /// for each reached non-root vertex `v` the connecting edge
    /// `previous[v] -> v` is copied with its weight (falling back to the
    /// reverse orientation for trees built over undirected usage, as Prim
    /// produces).
    ///
    /// # Panics
    /// Panics if `graph` does not have exactly `self.len()` vertices, or if a
    /// recorded edge no longer exists in `graph`.
    pub fn subgraph<V, E, const CHUNK: usize>(
        &self,
        graph: &DenseGraph<V, E, CHUNK>,
    ) -> DenseGraph<V, E, CHUNK>
    where
        V: Clone,
        E: Clone,
    {
        assert!(
            graph.len() == self.len(),
            "graph has {got} vertices, table was built over {want}",
            got = graph.len(),
            want = self.len()
        );

        let mut out = DenseGraph::with_capacity(graph.len());
        for vertex in graph.vertices() {
            out.insert_vertex(vertex.clone());
        }
        for (v, prev) in self.previous.iter().enumerate() {
            let Some(u) = *prev else { continue };
            let weight = graph
                .edge(u, v)
                .or_else(|| graph.edge(v, u))
                .unwrap_or_else(|| panic!("tree edge {u}->{v} missing from graph"));
            out.insert_edge(u, v, weight.clone());
        }
        out
    }
}

/// Iterator over the predecessor chain from a vertex back to its root.
pub struct PathTo<'a, C> {
    tree: &'a SearchTree<C>,
    current: Option<usize>,
}

impl<C> Iterator for PathTo<'_, C> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.current?;
        self.current = self.tree.previous[v];
        Some(v)
    }
}
