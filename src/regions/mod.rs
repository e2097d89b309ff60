// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region counting over a bit grid.
//!
//! A region is a maximal set of set cells joined by up/down/left/right
//! adjacency. Cells are scanned in row-major order; each set cell not yet
//! visited starts a new region, which is then expanded one wavefront at a
//! time. The expansion keeps its frontier on the heap, so a region that
//! covers the whole grid needs no deep call stack.
//!
//! # Examples
//!
//! ```
//! use knot_grid::grid::BitGrid;
//! use knot_grid::regions::{count_regions, count_set_bits};
//!
//! // Two diagonal cells are not connected.
//! let grid = BitGrid::<2, 2>::from_fn(|row, col| row == col);
//! assert_eq!(count_set_bits(&grid), 2);
//! assert_eq!(count_regions(&grid), 2);
//! ```

pub mod statistics;

pub use statistics::{Counters, FillStatistics};

use crate::grid::{BitGrid, Markers};
use tracing::debug;

/// Total number of set cells.
pub fn count_set_bits<const W: usize, const H: usize>(grid: &BitGrid<W, H>) -> usize {
    grid.count_set()
}

/// Number of 4-connected regions of set cells.
pub fn count_regions<const W: usize, const H: usize>(grid: &BitGrid<W, H>) -> usize {
    RegionCounter::new(grid).scan().count()
}

/// Result of a full region scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionScan {
    /// Size of each region, in discovery order.
    pub sizes: Vec<usize>,
    pub statistics: FillStatistics,
}

impl RegionScan {
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Size of the largest region, or 0 for an empty grid.
    pub fn largest(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

/// Wavefront flood fill over one grid.
///
/// Owns the visited markers for the duration of a single scan.
pub struct RegionCounter<'a, const W: usize, const H: usize> {
    grid: &'a BitGrid<W, H>,
    markers: Markers<W, H>,
    statistics: FillStatistics,
}

impl<'a, const W: usize, const H: usize> RegionCounter<'a, W, H> {
    pub fn new(grid: &'a BitGrid<W, H>) -> Self {
        Self {
            grid,
            markers: Markers::new(),
            statistics: FillStatistics::new(),
        }
    }

    /// Scan every cell and expand each unvisited set cell into its region.
    pub fn scan(mut self) -> RegionScan {
        let grid = self.grid;
        let mut sizes = Vec::new();
        for (cell, row, col) in grid.cells() {
            if !cell.is_set() || self.markers.is_marked(row, col) {
                continue;
            }
            self.statistics.increment(Counters::Regions);
            sizes.push(self.expand(row, col));
        }

        debug_assert_eq!(
            self.statistics.get(Counters::MarkedCells) as usize,
            grid.count_set()
        );
        debug!(regions = sizes.len(), statistics = %self.statistics, "counted regions");

        RegionScan {
            sizes,
            statistics: self.statistics,
        }
    }

    /// Mark every cell of the region containing `(row, col)` and return its size.
    ///
    /// Neighbours are marked as they join the next frontier, so each cell is
    /// placed in a frontier exactly once.
    fn expand(&mut self, row: usize, col: usize) -> usize {
        self.markers.mark(row, col);
        let mut frontier = vec![(row, col)];
        let mut size = 1;

        while !frontier.is_empty() {
            self.statistics.increment(Counters::Levels);
            let mut next = Vec::new();
            for &(r, c) in &frontier {
                for (nr, nc) in BitGrid::<W, H>::neighbours(r, c) {
                    self.statistics.increment(Counters::NeighbourProbes);
                    if self.grid.is_set(nr, nc) && self.markers.mark(nr, nc) {
                        next.push((nr, nc));
                    }
                }
            }
            size += next.len();
            frontier = next;
        }

        self.statistics.add(Counters::MarkedCells, size as u64);
        size
    }
}
