//! The dense graph engine: the adjacency-matrix store, the shared result
//! table, and the algorithm suite.

pub mod dense;
pub mod search_tree;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use dense::{DenseGraph, DEFAULT_CHUNK};
pub use search_tree::{PathTo, SearchTree};
pub use shortest_path::{astar, bellman_ford, dijkstra, NegativeCycle};
pub use spanning_tree::{kruskal, prim};
pub use traversal::{bfs, dfs, Bfs, Dfs};
