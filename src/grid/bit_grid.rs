// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-size two-dimensional bitset.
//!
//! A `BitGrid<W, H>` stores `W * H` binary cells in row-major order, packed
//! 64 cells per `u64` word. The same type backs both the disk grid and the
//! visited markers used while counting regions.
//!
//! # Examples
//!
//! ```
//! use knot_grid::grid::{BitGrid, Cell};
//!
//! let mut grid = BitGrid::<3, 2>::new();
//! grid.set(1, 2, Cell::Set);
//! assert_eq!(grid.get(1, 2), Cell::Set);
//! assert_eq!(grid.count_set(), 1);
//! assert_eq!(grid.to_string(), "...\n..#\n");
//! ```

use std::fmt;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Free,
    Set,
}

impl Cell {
    pub fn is_set(self) -> bool {
        self == Cell::Set
    }

    /// Character used when rendering: `#` for set, `.` for free.
    pub fn to_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Set => '#',
        }
    }
}

impl From<bool> for Cell {
    fn from(set: bool) -> Self {
        if set {
            Cell::Set
        } else {
            Cell::Free
        }
    }
}

/// A `W` wide, `H` high grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitGrid<const W: usize, const H: usize> {
    words: Vec<u64>,
}

impl<const W: usize, const H: usize> BitGrid<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    /// Number of u64 words needed for W*H cells.
    const WORDS: usize = (W * H + 63) / 64;

    /// Create a grid with every cell free.
    pub fn new() -> Self {
        Self {
            words: vec![0; Self::WORDS],
        }
    }

    /// Create a grid with every cell set.
    pub fn full() -> Self {
        Self::from_fn(|_, _| true)
    }

    /// Create a grid where `f(row, col)` decides whether each cell is set.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut grid = Self::new();
        for row in 0..H {
            for col in 0..W {
                if f(row, col) {
                    grid.set(row, col, Cell::Set);
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    /// Whether `(row, col)` lies inside the grid. Takes signed offsets so
    /// callers can probe neighbours without underflow.
    pub fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < H && (col as usize) < W
    }

    /// Word index and bit offset of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid. Every caller in this crate is
    /// bounded by construction, so reaching the panic means a logic error.
    fn locate(row: usize, col: usize) -> (usize, usize) {
        assert!(
            row < H && col < W,
            "Grid index out of range: ({}, {}) not in {}x{}",
            row,
            col,
            W,
            H
        );
        let index = row * W + col;
        (index / 64, index % 64)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        Cell::from(self.is_set(row, col))
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        let (word, bit) = Self::locate(row, col);
        (self.words[word] >> bit) & 1 != 0
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let (word, bit) = Self::locate(row, col);
        match cell {
            Cell::Set => self.words[word] |= 1u64 << bit,
            Cell::Free => self.words[word] &= !(1u64 << bit),
        }
    }

    /// Number of set cells (population count).
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over `(cell, row, col)` in row-major order.
    ///
    /// The iterator borrows the grid; call again to restart.
    pub fn cells(&self) -> Cells<'_, W, H> {
        Cells {
            grid: self,
            index: 0,
        }
    }

    /// The in-bounds orthogonal neighbours of `(row, col)`: down, up, right, left.
    pub fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        const OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if Self::in_bounds(r, c) {
                Some((r as usize, c as usize))
            } else {
                None
            }
        })
    }

    /// Render the top-left `rows` x `cols` corner, one line per row.
    pub fn render_corner(&self, rows: usize, cols: usize) -> String {
        let rows = rows.min(H);
        let cols = cols.min(W);
        let mut out = String::with_capacity(rows * (cols + 1));
        for row in 0..rows {
            for col in 0..cols {
                out.push(self.get(row, col).to_char());
            }
            out.push('\n');
        }
        out
    }
}

impl<const W: usize, const H: usize> Default for BitGrid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> fmt::Display for BitGrid<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_corner(H, W))
    }
}

/// Row-major iterator over the cells of a [`BitGrid`].
pub struct Cells<'a, const W: usize, const H: usize> {
    grid: &'a BitGrid<W, H>,
    index: usize,
}

impl<'a, const W: usize, const H: usize> Iterator for Cells<'a, W, H> {
    type Item = (Cell, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= W * H {
            return None;
        }
        let row = self.index / W;
        let col = self.index % W;
        self.index += 1;
        Some((self.grid.get(row, col), row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = W * H - self.index.min(W * H);
        (remaining, Some(remaining))
    }
}

impl<'a, const W: usize, const H: usize> ExactSizeIterator for Cells<'a, W, H> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let grid = BitGrid::<7, 5>::new();
        assert_eq!(grid.count_set(), 0);
        assert!(grid.cells().all(|(cell, _, _)| cell == Cell::Free));
    }

    #[test]
    fn test_full() {
        let grid = BitGrid::<7, 5>::full();
        assert_eq!(grid.count_set(), 35);
        assert_eq!(grid.get(4, 6), Cell::Set);
    }

    #[test]
    fn test_set_and_clear() {
        let mut grid = BitGrid::<128, 128>::new();
        grid.set(127, 127, Cell::Set);
        grid.set(0, 64, Cell::Set);
        assert!(grid.is_set(127, 127));
        assert!(grid.is_set(0, 64));
        assert!(!grid.is_set(0, 63));
        assert_eq!(grid.count_set(), 2);

        grid.set(0, 64, Cell::Free);
        assert!(!grid.is_set(0, 64));
        grid.set(0, 64, Cell::Free); // Idempotent
        assert_eq!(grid.count_set(), 1);
    }

    #[test]
    #[should_panic(expected = "Grid index out of range")]
    fn test_row_out_of_range() {
        let grid = BitGrid::<4, 4>::new();
        grid.get(4, 0);
    }

    #[test]
    #[should_panic(expected = "Grid index out of range")]
    fn test_col_out_of_range() {
        let mut grid = BitGrid::<4, 3>::new();
        grid.set(0, 4, Cell::Set);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = BitGrid::<3, 2>::from_fn(|row, col| row == 1 && col == 0);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (Cell::Free, 0, 0));
        assert_eq!(cells[2], (Cell::Free, 0, 2));
        assert_eq!(cells[3], (Cell::Set, 1, 0));
        assert_eq!(cells[5], (Cell::Free, 1, 2));
    }

    #[test]
    fn test_cells_restartable() {
        let grid = BitGrid::<5, 5>::from_fn(|row, col| (row + col) % 2 == 0);
        let first = grid.cells().filter(|(c, _, _)| c.is_set()).count();
        let second = grid.cells().filter(|(c, _, _)| c.is_set()).count();
        assert_eq!(first, 13);
        assert_eq!(first, second);
        assert_eq!(grid.cells().len(), 25);
    }

    #[test]
    fn test_neighbours() {
        type G = BitGrid<3, 3>;
        let mut corner: Vec<_> = G::neighbours(0, 0).collect();
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        assert_eq!(G::neighbours(1, 1).count(), 4);

        let mut edge: Vec<_> = G::neighbours(2, 1).collect();
        edge.sort();
        assert_eq!(edge, vec![(1, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_neighbours_single_cell_grid() {
        assert_eq!(BitGrid::<1, 1>::neighbours(0, 0).count(), 0);
    }

    #[test]
    fn test_render_corner() {
        let grid = BitGrid::<4, 4>::from_fn(|row, col| row == col);
        assert_eq!(grid.render_corner(2, 3), "#..\n.#.\n");
        assert_eq!(grid.render_corner(10, 10), grid.to_string());
    }
}
