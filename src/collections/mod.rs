//! Collections the graph engine is built on.
//!
//! Organized by collaborator role:
//! - `square_matrix`: the dense edge storage (strided resize, swap-compaction)
//! - `binary_heap`: the priority-queue frontier for Dijkstra, A* and Prim
//! - `disjoint_set`: the cycle detector for Kruskal

pub mod binary_heap;
pub mod disjoint_set;
pub mod square_matrix;

// Re-export commonly used types from submodules
pub use binary_heap::MinHeap;
pub use disjoint_set::DisjointSet;
pub use square_matrix::SquareMatrix;
