// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end analysis of a key: build the disk grid, then count.

use crate::error::KnotError;
use crate::grid::{build, DiskGrid};
use crate::regions::{count_regions, count_set_bits};
use std::fmt;

/// Summary of one disk grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskReport {
    pub set_bits: usize,
    pub regions: usize,
}

impl DiskReport {
    /// Count set bits and regions of an already built grid.
    pub fn of_grid(grid: &DiskGrid) -> Self {
        Self {
            set_bits: count_set_bits(grid),
            regions: count_regions(grid),
        }
    }
}

impl fmt::Display for DiskReport {
    /// The two result lines, each newline terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Set bits: {}", self.set_bits)?;
        writeln!(f, "Regions: {}", self.regions)
    }
}

/// Build the grid for `key` and summarize it.
pub fn analyze(key: &str) -> Result<DiskReport, KnotError> {
    let grid = build(key)?;
    Ok(DiskReport::of_grid(&grid))
}
