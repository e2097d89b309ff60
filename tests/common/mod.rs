// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use knot_grid::grid::DiskGrid;

/// Key and expected counts from the published disk example.
pub const EXAMPLE_KEY: &str = "flqrgnkx";
pub const EXAMPLE_SET_BITS: usize = 8108;
pub const EXAMPLE_REGIONS: usize = 1242;

/// A full-size grid with no two set cells adjacent.
pub fn checkerboard(phase: usize) -> DiskGrid {
    DiskGrid::from_fn(|row, col| (row + col + phase) % 2 == 0)
}

/// A full-size grid of `band`-wide horizontal stripes, starting with a set stripe.
pub fn stripes(band: usize) -> DiskGrid {
    DiskGrid::from_fn(|row, _| (row / band) % 2 == 0)
}
