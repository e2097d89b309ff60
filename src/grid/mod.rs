// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit grids.
//!
//! - BitGrid: fixed-size row-major bitset with a restartable cell iterator
//! - Markers: monotonic visited set, backed by its own BitGrid
//! - builder: the 128x128 disk grid derived from knot hashes of a key

pub mod bit_grid;
pub mod builder;
pub mod markers;

pub use bit_grid::{BitGrid, Cell, Cells};
pub use builder::{build, row_key, DiskGrid, GRID_SIZE};
pub use markers::Markers;
