// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visited markers for region counting.
//!
//! Wraps its own [`BitGrid`] rather than sharing the data grid. Marks are
//! only ever added, never cleared.

use crate::grid::{BitGrid, Cell};

#[derive(Debug, Clone, Default)]
pub struct Markers<const W: usize, const H: usize> {
    marks: BitGrid<W, H>,
}

impl<const W: usize, const H: usize> Markers<W, H> {
    pub fn new() -> Self {
        Self {
            marks: BitGrid::new(),
        }
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks.is_set(row, col)
    }

    /// Mark a cell. Returns true if it was not already marked.
    pub fn mark(&mut self, row: usize, col: usize) -> bool {
        if self.marks.is_set(row, col) {
            return false;
        }
        self.marks.set(row, col, Cell::Set);
        true
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.marks.count_set()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
