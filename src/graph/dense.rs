//! `DenseGraph` — a directed graph stored as a growable adjacency matrix.
//!
//! Vertices live in a flat `Vec<V>`; edges live in a single row-major
//! [`SquareMatrix`] of `Option<E>` cells whose side is the vertex *capacity*.
//! A cell of `None` is the non-edge; `Some(weight)` is an edge. Vertex index
//! `i` is valid iff `i < len`, and edge `(i, j)` is always readable in O(1)
//! at `matrix[i * capacity + j]`.
//!
//! Capacity is quantized to fixed-size chunks (`CHUNK` vertices at a time),
//! amortizing matrix reallocation; every resize re-strides the matrix
//! row-by-row.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert_vertex` | \(O(1)\) amortized | \(O(n^2)\) when a chunk boundary forces a matrix restride |
//! | `remove_vertex` | \(O(n)\) | Swap-compaction of one row/column pair |
//! | `insert_edge` / `remove_edge` / `edge` | \(O(1)\) | Direct matrix addressing |
//! | `neighbors` | \(O(n)\) | Scans one matrix row |
//! | `edges` | \(O(n^2)\) | Scans the occupied matrix prefix |
//!
//! ### Index stability
//! [`remove_vertex`](DenseGraph::remove_vertex) keeps storage dense by
//! swapping the *last* vertex (and its entire matrix row and column) into the
//! freed slot. Any externally held index equal to the old last index now
//! refers to different data — the store never promises index stability across
//! a removal. The method returns the slot that received the swapped vertex so
//! callers can patch their own indices.

use core::fmt;

use crate::collections::SquareMatrix;

/// Default growth chunk: capacity moves in steps of this many vertices.
pub const DEFAULT_CHUNK: usize = 32;

/// A dense directed graph over vertex payloads `V` and edge weights `E`.
///
/// `CHUNK` is the capacity growth quantum; the default suits graphs of a few
/// hundred vertices. Smaller chunks trade reallocation frequency for memory.
pub struct DenseGraph<V, E, const CHUNK: usize = DEFAULT_CHUNK> {
    vertices: Vec<V>,
    matrix: SquareMatrix<Option<E>>,
}

impl<V, E, const CHUNK: usize> DenseGraph<V, E, CHUNK> {
    /// Creates an empty graph with no allocated capacity.
    pub const fn new() -> Self {
        assert!(CHUNK != 0, "DenseGraph CHUNK must be > 0");
        Self {
            vertices: Vec::new(),
            matrix: SquareMatrix::new(),
        }
    }

    /// Creates an empty graph with capacity for at least `capacity` vertices
    /// (rounded up to a whole chunk).
    pub fn with_capacity(capacity: usize) -> Self {
        let side = Self::quantize(capacity);
        Self {
            vertices: Vec::with_capacity(side),
            matrix: SquareMatrix::with_side(side),
        }
    }

    /// Rounds `n` up to a whole number of chunks.
    #[inline]
    fn quantize(n: usize) -> usize {
        n.div_ceil(CHUNK) * CHUNK
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the allocated vertex capacity (the matrix side).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.matrix.side()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Removes all vertices and edges and releases the matrix storage.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix.resize(0);
    }

    /// Appends a vertex, growing capacity by one chunk if full.
    ///
    /// The new vertex's matrix row and column start as non-edges. Returns the
    /// new vertex's index.
    pub fn insert_vertex(&mut self, vertex: V) -> usize {
        let idx = self.vertices.len();
        if idx == self.matrix.side() {
            self.matrix.resize(self.matrix.side() + CHUNK);
        }
        self.vertices.push(vertex);
        idx
    }

    /// Removes vertex `i` by swap-compaction and returns its payload together
    /// with the slot that received the swapped-in last vertex.
    ///
    /// All edges incident to `i` are removed first. If `i` was not the last
    /// vertex, the last vertex (payload plus its whole matrix row and column)
    /// moves into slot `i` and the second return value is `Some(i)`; external
    /// indices referring to the old last vertex are invalidated. If `i` was
    /// already last the second return value is `None`.
    ///
    /// Capacity shrinks back to a whole-chunk quantum when a full chunk
    /// becomes free.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn remove_vertex(&mut self, i: usize) -> (V, Option<usize>) {
        let len = self.vertices.len();
        assert!(i < len, "vertex {i} out of bounds for length {len}");
        let last = len - 1;

        // Destroy edges incident to the removed vertex before anything moves.
        self.matrix.clear_row(i);
        self.matrix.clear_col(i);

        let moved = if i == last {
            None
        } else {
            self.matrix.swap_compact(i, last);
            Some(i)
        };
        let vertex = self.vertices.swap_remove(i);

        let target = Self::quantize(self.vertices.len());
        if target < self.matrix.side() {
            self.matrix.resize(target);
        }

        (vertex, moved)
    }

    /// Returns a shared reference to vertex `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline(always)]
    pub fn vertex(&self, i: usize) -> &V {
        assert!(i < self.vertices.len(), "vertex {i} out of bounds for length {len}", len = self.vertices.len());
        &self.vertices[i]
    }

    /// Returns a mutable reference to vertex `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline(always)]
    pub fn vertex_mut(&mut self, i: usize) -> &mut V {
        assert!(i < self.vertices.len(), "vertex {i} out of bounds for length {len}", len = self.vertices.len());
        &mut self.vertices[i]
    }

    #[inline(always)]
    fn assert_pair(&self, from: usize, to: usize) {
        let len = self.vertices.len();
        assert!(from < len, "from vertex {from} out of bounds for length {len}");
        assert!(to < len, "to vertex {to} out of bounds for length {len}");
    }

    /// Inserts (or replaces) the directed edge `from -> to`, returning the
    /// displaced weight if one was present.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of range.
    pub fn insert_edge(&mut self, from: usize, to: usize, weight: E) -> Option<E> {
        self.assert_pair(from, to);
        self.matrix.replace(from, to, Some(weight))
    }

    /// Removes the directed edge `from -> to`, returning its weight if it
    /// was present.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of range.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Option<E> {
        self.assert_pair(from, to);
        self.matrix.replace(from, to, None)
    }

    /// Returns `true` if the directed edge `from -> to` exists.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of range.
    #[inline]
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.edge(from, to).is_some()
    }

    /// Returns the weight of edge `from -> to`, if present.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of range.
    #[inline(always)]
    pub fn edge(&self, from: usize, to: usize) -> Option<&E> {
        self.assert_pair(from, to);
        self.matrix.get(from, to).as_ref()
    }

    /// Returns a mutable reference to the weight of edge `from -> to`, if
    /// present.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of range.
    #[inline]
    pub fn edge_mut(&mut self, from: usize, to: usize) -> Option<&mut E> {
        self.assert_pair(from, to);
        self.matrix.get_mut(from, to).as_mut()
    }

    /// Iterates over vertex payloads in index order.
    pub fn vertices(&self) -> core::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Iterates over all edges as `(from, to, &weight)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &E)> {
        let len = self.vertices.len();
        (0..len).flat_map(move |u| {
            self.matrix.row(u)[..len]
                .iter()
                .enumerate()
                .filter_map(move |(v, cell)| cell.as_ref().map(|w| (u, v, w)))
        })
    }

    /// Iterates over the out-neighbors of `u` as `(to, &weight)` in ascending
    /// column order, skipping non-edge cells.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, &E)> {
        let len = self.vertices.len();
        assert!(u < len, "vertex {u} out of bounds for length {len}");
        self.matrix.row(u)[..len]
            .iter()
            .enumerate()
            .filter_map(|(v, cell)| cell.as_ref().map(|w| (v, w)))
    }
}

impl<V, E, const CHUNK: usize> Default for DenseGraph<V, E, CHUNK> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, E: Clone, const CHUNK: usize> Clone for DenseGraph<V, E, CHUNK> {
    /// Deep-copies the vertices and the full matrix.
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            matrix: self.matrix.clone(),
        }
    }
}

impl<V, E, const CHUNK: usize> fmt::Debug for DenseGraph<V, E, CHUNK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseGraph")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("edges", &self.edge_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Graph = DenseGraph<&'static str, u32, 4>;

    #[test]
    fn insert_vertices_grows_in_chunks() {
        let mut g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.capacity(), 0);

        for (i, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
            assert_eq!(g.insert_vertex(name), i);
        }
        assert_eq!(g.capacity(), 4);

        g.insert_vertex("e");
        assert_eq!(g.len(), 5);
        assert_eq!(g.capacity(), 8);
    }

    #[test]
    fn edges_are_directed_and_o1() {
        let mut g = Graph::new();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");

        assert_eq!(g.insert_edge(a, b, 7), None);
        assert_eq!(g.edge(a, b), Some(&7));
        assert_eq!(g.edge(b, a), None);
        assert!(g.contains_edge(a, b));
        assert!(!g.contains_edge(b, a));

        // Replacing returns the displaced weight.
        assert_eq!(g.insert_edge(a, b, 9), Some(7));
        assert_eq!(g.remove_edge(a, b), Some(9));
        assert_eq!(g.remove_edge(a, b), None);
    }

    #[test]
    fn edges_survive_chunk_boundary_restride() {
        let mut g = Graph::new();
        for i in 0..4 {
            g.insert_vertex(["a", "b", "c", "d"][i]);
        }
        g.insert_edge(0, 3, 1);
        g.insert_edge(3, 1, 2);
        g.insert_edge(2, 2, 3);

        // Crossing the chunk boundary re-strides the matrix.
        g.insert_vertex("e");
        assert_eq!(g.edge(0, 3), Some(&1));
        assert_eq!(g.edge(3, 1), Some(&2));
        assert_eq!(g.edge(2, 2), Some(&3));
        assert_eq!(g.edge(0, 4), None);
    }

    #[test]
    fn remove_vertex_swaps_last_into_slot() {
        let mut g = Graph::new();
        for name in ["a", "b", "c", "d"] {
            g.insert_vertex(name);
        }
        g.insert_edge(3, 0, 30);
        g.insert_edge(0, 3, 3);
        g.insert_edge(1, 2, 12);

        let (removed, moved) = g.remove_vertex(1);
        assert_eq!(removed, "b");
        assert_eq!(moved, Some(1));
        assert_eq!(g.len(), 3);

        // "d" (formerly index 3) now lives at index 1, edges intact.
        assert_eq!(*g.vertex(1), "d");
        assert_eq!(g.edge(1, 0), Some(&30));
        assert_eq!(g.edge(0, 1), Some(&3));
        // Edges incident to the removed vertex are gone.
        assert!(!g.contains_edge(1, 2));
    }

    #[test]
    fn remove_last_vertex_reports_no_swap() {
        let mut g = Graph::new();
        g.insert_vertex("a");
        g.insert_vertex("b");
        let (removed, moved) = g.remove_vertex(1);
        assert_eq!(removed, "b");
        assert_eq!(moved, None);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn remove_vertex_with_self_loop_on_last() {
        let mut g = Graph::new();
        for name in ["a", "b", "c"] {
            g.insert_vertex(name);
        }
        g.insert_edge(2, 2, 22);
        let (_, moved) = g.remove_vertex(0);
        assert_eq!(moved, Some(0));
        // The self-loop follows its vertex to the new slot.
        assert_eq!(g.edge(0, 0), Some(&22));
    }

    #[test]
    fn capacity_shrinks_by_chunks() {
        let mut g = Graph::new();
        for i in 0..9 {
            g.insert_vertex(["a", "b", "c", "d", "e", "f", "g", "h", "i"][i]);
        }
        assert_eq!(g.capacity(), 12);
        while g.len() > 4 {
            g.remove_vertex(g.len() - 1);
        }
        assert_eq!(g.capacity(), 4);
    }

    #[test]
    fn neighbor_iteration_is_ascending_and_skips_non_edges() {
        let mut g = Graph::new();
        for name in ["a", "b", "c", "d"] {
            g.insert_vertex(name);
        }
        g.insert_edge(0, 3, 3);
        g.insert_edge(0, 1, 1);

        let nbrs: Vec<_> = g.neighbors(0).map(|(v, &w)| (v, w)).collect();
        assert_eq!(nbrs, vec![(1, 1), (3, 3)]);

        let all: Vec<_> = g.edges().map(|(u, v, &w)| (u, v, w)).collect();
        assert_eq!(all, vec![(0, 1, 1), (0, 3, 3)]);
    }

    #[test]
    fn deep_copy_is_independent() {
        let mut g = Graph::new();
        g.insert_vertex("a");
        g.insert_vertex("b");
        g.insert_edge(0, 1, 5);

        let mut copy = g.clone();
        copy.insert_edge(1, 0, 6);
        *copy.vertex_mut(0) = "z";

        assert_eq!(g.edge(1, 0), None);
        assert_eq!(*g.vertex(0), "a");
        assert_eq!(copy.edge(0, 1), Some(&5));
    }

    #[test]
    fn clear_releases_storage() {
        let mut g = Graph::new();
        g.insert_vertex("a");
        g.insert_edge(0, 0, 1);
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn edge_query_out_of_range_panics() {
        let mut g = Graph::new();
        g.insert_vertex("a");
        let _ = g.edge(0, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn remove_vertex_out_of_range_panics() {
        let mut g = Graph::new();
        g.insert_vertex("a");
        let _ = g.remove_vertex(1);
    }
}
