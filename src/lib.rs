//! # `lattice` - Dense Adjacency-Matrix Graph Toolkit
//!
//! A graph engine built on flat, resizable arrays with index-based internal
//! linkage instead of native pointers: a growable adjacency-matrix store, a
//! pluggable cost algebra, and a suite of classical graph algorithms sharing
//! one result representation.
//!
//! ## Design
//!
//! ### Index-based linkage
//! Vertices are addressed by `usize` indices into a dense prefix; predecessor
//! links, heap payloads and union-find parents are all indices with
//! `Option<usize>` standing in for NIL. There are no interior references to
//! chase and no per-node allocations.
//!
//! ### Dense matrix storage
//! Edges live in one row-major `capacity × capacity` matrix of `Option<E>`
//! cells: edge lookup is a single multiply-add, and a cell of `None` *is* the
//! non-edge (the sum-type replaces a sentinel value compared through a
//! user comparator). Capacity moves in fixed-size chunks, and every resize
//! re-strides the matrix row-by-row.
//!
//! ### Swap-compaction
//! Removing a vertex keeps storage dense by moving the last vertex — payload,
//! matrix row and matrix column — into the freed slot. Indices are therefore
//! **not stable across removal**; [`DenseGraph::remove_vertex`] reports which
//! slot received the swapped vertex so callers can patch their own bookkeeping.
//!
//! ### Cost algebras
//! Weighted algorithms see edge weights only through
//! [`CostAlgebra`](cost::CostAlgebra) — `compare`, `add`, `zero`, `infinity` —
//! so one Dijkstra serves `u32` hop counts, `f64` distances, or custom
//! multi-field weights. Overflow policy belongs to the algebra: the provided
//! integer algebra saturates, the float algebra leans on IEEE infinity.
//!
//! ### One result shape
//! Every algorithm returns a [`SearchTree`]: parallel `previous`/`cost`
//! arrays indexed by vertex, with path reconstruction, cost-ordered
//! iteration, and extraction of the discovered tree into a fresh graph.
//!
//! ## Failure model
//!
//! Out-of-range indices are caller bugs and panic with a formatted assertion;
//! they are never converted into recoverable errors. The one *runtime*
//! condition an algorithm can hit — a negative cycle under Bellman-Ford — is
//! reported as a typed error instead of a silently wrong table.
//!
//! ## Example
//!
//! ```rust
//! use lattice::{DenseGraph, SaturatingAlgebra, dijkstra};
//!
//! let mut graph: DenseGraph<&str, u32> = DenseGraph::new();
//! let a = graph.insert_vertex("a");
//! let b = graph.insert_vertex("b");
//! let c = graph.insert_vertex("c");
//! graph.insert_edge(a, b, 4);
//! graph.insert_edge(a, c, 1);
//! graph.insert_edge(c, b, 2);
//!
//! let algebra = SaturatingAlgebra::<u32>::new();
//! let tree = dijkstra(&graph, &algebra, a, None);
//! assert_eq!(*tree.cost(b), 3);
//! assert_eq!(tree.path_to(b).collect::<Vec<_>>(), vec![b, c, a]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod cost;
pub mod graph;

pub use collections::{DisjointSet, MinHeap, SquareMatrix};
pub use cost::{CostAlgebra, FloatAlgebra, SaturatingAlgebra};
pub use graph::{
    astar,
    bellman_ford,
    bfs,
    dfs,
    dijkstra,
    kruskal,
    prim,
    Bfs,
    DenseGraph,
    Dfs,
    NegativeCycle,
    PathTo,
    SearchTree,
    DEFAULT_CHUNK,
};
