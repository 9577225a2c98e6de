//! Unweighted traversals (BFS, DFS) over a [`DenseGraph`].
//!
//! Two surfaces are provided:
//! - [`bfs`] / [`dfs`] build a [`SearchTree`] of predecessor links, with an
//!   optional `end` vertex for early cutoff;
//! - [`Bfs`] / [`Dfs`] are lazy iterators yielding vertex indices in visit
//!   order, for callers that only want reachability order. Dropping the
//!   iterator early is the "stop early" signal.
//!
//! Both disciplines mark a vertex visited the first time it enters the
//! frontier and never revisit it. Neighbors enter the frontier in ascending
//! column order; with the DFS stack discipline this means siblings are
//! *expanded* in descending index order.

use std::collections::VecDeque;

use crate::graph::dense::DenseGraph;
use crate::graph::search_tree::SearchTree;

/// Breadth-first search from `start`, producing predecessor links.
///
/// Visits vertices in FIFO frontier order. If `end` is given, the search
/// stops as soon as `end` is dequeued; otherwise every vertex reachable from
/// `start` is visited. Unreachable vertices keep `previous = None`.
///
/// # Panics
/// Panics if `start` or `end` is out of range.
pub fn bfs<V, E, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    start: usize,
    end: Option<usize>,
) -> SearchTree<()> {
    let len = graph.len();
    assert!(start < len, "start vertex {start} out of bounds for length {len}");
    if let Some(end) = end {
        assert!(end < len, "end vertex {end} out of bounds for length {len}");
    }

    let mut tree = SearchTree::rooted(start, len, ());
    let mut visited = vec![false; len];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        if end == Some(u) {
            break;
        }
        for (v, _) in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                tree.record(v, u, ());
                queue.push_back(v);
            }
        }
    }

    tree
}

/// Depth-first search from `start`, producing predecessor links.
///
/// Visits vertices in LIFO frontier order (vertices are marked when pushed,
/// so this is the stack-discipline DFS, not the recursive one). If `end` is
/// given, the search stops as soon as `end` is popped. Unreachable vertices
/// keep `previous = None`.
///
/// # Panics
/// Panics if `start` or `end` is out of range.
pub fn dfs<V, E, const CHUNK: usize>(
    graph: &DenseGraph<V, E, CHUNK>,
    start: usize,
    end: Option<usize>,
) -> SearchTree<()> {
    let len = graph.len();
    assert!(start < len, "start vertex {start} out of bounds for length {len}");
    if let Some(end) = end {
        assert!(end < len, "end vertex {end} out of bounds for length {len}");
    }

    let mut tree = SearchTree::rooted(start, len, ());
    let mut visited = vec![false; len];
    let mut stack = Vec::new();

    visited[start] = true;
    stack.push(start);

    while let Some(u) = stack.pop() {
        if end == Some(u) {
            break;
        }
        for (v, _) in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                tree.record(v, u, ());
                stack.push(v);
            }
        }
    }

    tree
}

/// An iterator yielding vertex indices in BFS visit order.
pub struct Bfs<'a, V, E, const CHUNK: usize> {
    graph: &'a DenseGraph<V, E, CHUNK>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, V, E, const CHUNK: usize> Bfs<'a, V, E, CHUNK> {
    /// Creates a BFS iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of range.
    pub fn new(graph: &'a DenseGraph<V, E, CHUNK>, start: usize) -> Self {
        let len = graph.len();
        assert!(start < len, "start vertex {start} out of bounds for length {len}");
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<V, E, const CHUNK: usize> Iterator for Bfs<'_, V, E, CHUNK> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for (v, _) in self.graph.neighbors(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// An iterator yielding vertex indices in DFS visit order.
pub struct Dfs<'a, V, E, const CHUNK: usize> {
    graph: &'a DenseGraph<V, E, CHUNK>,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a, V, E, const CHUNK: usize> Dfs<'a, V, E, CHUNK> {
    /// Creates a DFS iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is out of range.
    pub fn new(graph: &'a DenseGraph<V, E, CHUNK>, start: usize) -> Self {
        let len = graph.len();
        assert!(start < len, "start vertex {start} out of bounds for length {len}");
        let mut visited = vec![false; len];
        visited[start] = true;
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }
}

impl<V, E, const CHUNK: usize> Iterator for Dfs<'_, V, E, CHUNK> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        for (v, _) in self.graph.neighbors(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.stack.push(v);
            }
        }
        Some(u)
    }
}
