//! `MinHeap` — a keyed min-priority queue implemented with a binary heap.
//!
//! Entries are `(key, payload)` pairs ordered by a comparator captured at
//! construction, so the ordering can come from a [`CostAlgebra`] rather than
//! an `Ord` bound on the key type. `pop` returns the entry with the minimum
//! key.
//!
//! There is no decrease-key: the graph algorithms re-push an entry whenever a
//! vertex's tentative cost improves and skip stale entries on pop (lazy
//! deletion). Duplicate keys pop in arbitrary but deterministic order.
//!
//! [`CostAlgebra`]: crate::cost::CostAlgebra

use core::cmp::Ordering;
use core::fmt;

/// A min-priority queue over `(key, payload)` entries.
pub struct MinHeap<K, P, F> {
    data: Vec<(K, P)>,
    cmp: F,
}

impl<K, P, F> MinHeap<K, P, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty heap ordered by `cmp`.
    pub const fn new(cmp: F) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize, cmp: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an entry onto the heap.
    pub fn push(&mut self, key: K, payload: P) {
        self.data.push((key, payload));
        self.sift_up(self.data.len() - 1);
    }

    /// Pops the entry with the minimum key.
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Returns the minimum entry without removing it.
    pub fn peek(&self) -> Option<&(K, P)> {
        self.data.first()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Helper to compare the keys of two entries in the heap.
    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.data[a].0, &self.data[b].0) == Ordering::Less
    }
}

impl<K, P, F> fmt::Debug for MinHeap<K, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .finish()
    }
}
