//! `SquareMatrix` — a growable row-major square matrix in a single allocation.
//!
//! Goals:
//! - O(1) cell addressing via `row * side + col`
//! - stride-aware resizing: growing or shrinking copies row-by-row into the
//!   new stride, never as one flat copy (a flat copy would smear cells across
//!   row boundaries)
//! - swap-compaction: moving one row/column pair into another slot to keep
//!   the occupied prefix dense after a removal
//!
//! This is the storage building block under the dense adjacency-matrix graph,
//! which treats the matrix side as its vertex *capacity* and addresses only
//! the `len × len` prefix.

use core::mem;

/// A dense `side × side` matrix backed by one contiguous `Vec`.
pub struct SquareMatrix<T> {
    cells: Vec<T>,
    side: usize,
}

impl<T: Default> SquareMatrix<T> {
    /// Creates an empty matrix (`side == 0`).
    pub const fn new() -> Self {
        Self {
            cells: Vec::new(),
            side: 0,
        }
    }

    /// Creates a matrix with the given side, every cell default-initialized.
    pub fn with_side(side: usize) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(side * side, T::default);
        Self { cells, side }
    }

    /// Resizes the matrix to `new_side`, preserving the overlapping
    /// `min(side, new_side)` prefix of every surviving row.
    ///
    /// Cells are moved row-by-row into the new stride; new cells (when
    /// growing) are default-initialized, and cells beyond the new side (when
    /// shrinking) are dropped.
    pub fn resize(&mut self, new_side: usize) {
        if new_side == self.side {
            return;
        }
        let old_side = self.side;
        let keep = old_side.min(new_side);

        let mut cells = Vec::new();
        cells.resize_with(new_side * new_side, T::default);
        for row in 0..keep {
            for col in 0..keep {
                cells[row * new_side + col] =
                    mem::take(&mut self.cells[row * old_side + col]);
            }
        }
        self.cells = cells;
        self.side = new_side;
    }

    /// Moves row `src` into row `dst` and column `src` into column `dst`,
    /// leaving row/column `src` default-initialized.
    ///
    /// The diagonal cell `(src, src)` lands at `(dst, dst)`. Row/column `dst`
    /// are overwritten; callers that need their contents dropped first (the
    /// graph store does, to run edge destructors) must clear them beforehand.
    ///
    /// # Panics
    /// Panics if `dst` or `src` is out of range.
    pub fn swap_compact(&mut self, dst: usize, src: usize) {
        assert!(dst < self.side, "row {dst} out of range for side {side}", side = self.side);
        assert!(src < self.side, "row {src} out of range for side {side}", side = self.side);
        if dst == src {
            return;
        }
        let side = self.side;
        // Row first: (src, k) -> (dst, k). The diagonal (src, src) is now at
        // (dst, src).
        for k in 0..side {
            self.cells[dst * side + k] = mem::take(&mut self.cells[src * side + k]);
        }
        // Column second: (k, src) -> (k, dst). At k == dst this carries the
        // former diagonal on to (dst, dst).
        for k in 0..side {
            self.cells[k * side + dst] = mem::take(&mut self.cells[k * side + src]);
        }
    }

    /// Resets every cell in row `i` to the default value.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn clear_row(&mut self, i: usize) {
        assert!(i < self.side, "row {i} out of range for side {side}", side = self.side);
        for cell in &mut self.cells[i * self.side..(i + 1) * self.side] {
            *cell = T::default();
        }
    }

    /// Resets every cell in column `j` to the default value.
    ///
    /// # Panics
    /// Panics if `j` is out of range.
    pub fn clear_col(&mut self, j: usize) {
        assert!(j < self.side, "column {j} out of range for side {side}", side = self.side);
        for row in 0..self.side {
            self.cells[row * self.side + j] = T::default();
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Returns the matrix side (the stride).
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns a shared reference to cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(row < self.side, "row {row} out of range for side {side}", side = self.side);
        assert!(col < self.side, "column {col} out of range for side {side}", side = self.side);
        &self.cells[row * self.side + col]
    }

    /// Returns a mutable reference to cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(row < self.side, "row {row} out of range for side {side}", side = self.side);
        assert!(col < self.side, "column {col} out of range for side {side}", side = self.side);
        &mut self.cells[row * self.side + col]
    }

    /// Replaces cell `(row, col)`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn replace(&mut self, row: usize, col: usize, value: T) -> T {
        mem::replace(self.get_mut(row, col), value)
    }

    /// Returns row `i` as a slice of length `side`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.side, "row {i} out of range for side {side}", side = self.side);
        &self.cells[i * self.side..(i + 1) * self.side]
    }
}

impl<T: Default> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SquareMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            side: self.side,
        }
    }
}
