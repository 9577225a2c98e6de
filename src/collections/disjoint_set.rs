//! Disjoint Set (Union-Find) with path compression and union by rank.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<usize>`, so path compression runs through
//!   a shared reference with no `RefCell` overhead.
//! - Union by rank plus two-pass compression gives effectively constant-time
//!   `find`/`union`.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over `usize` ids.
pub struct DisjointSet {
    /// Parent pointers. `Cell` allows compression from `&self`.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a new empty disjoint set.
    pub const fn new() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Creates a disjoint set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new singleton set and returns its id.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, compressing the
    /// path along the way.
    ///
    /// # Panics
    /// Panics if `id` was never produced by [`make_set`](Self::make_set).
    pub fn find(&self, id: usize) -> usize {
        assert!(id < self.parent.len(), "id {id} out of range for {} sets", self.parent.len());

        // Pass 1: locate the root.
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        // Pass 2: point everything on the path at the root.
        let mut curr = id;
        while curr != root {
            let parent = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = parent;
        }

        root
    }

    /// Unites the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets, `false` if the union
    /// would have closed a cycle.
    ///
    /// # Panics
    /// Panics if `a` or `b` is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        // Union by rank: attach the shallower tree under the deeper one.
        let rank_a = self.rank[root_a];
        let rank_b = self.rank[root_b];

        if rank_a < rank_b {
            self.parent[root_a].set(root_b);
        } else if rank_a > rank_b {
            self.parent[root_b].set(root_a);
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] += 1;
        }

        true
    }

    /// Returns the number of elements across all sets.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no set has been created.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new()
    }
}
