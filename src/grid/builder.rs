// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Disk grid construction.
//!
//! Row `i` of the grid holds the 128 bits of `knot_hash("{key}-{i}")`,
//! most significant bit of each digest byte first.

use crate::error::KnotError;
use crate::grid::{BitGrid, Cell};
use crate::knot::{KnotHasher, DIGEST_BITS};
use tracing::{debug, trace};

/// Side length of the disk grid.
pub const GRID_SIZE: usize = DIGEST_BITS;

/// The 128x128 grid produced from a key.
pub type DiskGrid = BitGrid<GRID_SIZE, GRID_SIZE>;

/// Key hashed for a given row.
pub fn row_key(key: &str, row: usize) -> String {
    format!("{}-{}", key, row)
}

/// Build the disk grid for `key`.
///
/// Fails with [`KnotError::NonAsciiInput`] if `key` holds a character that
/// does not fit in a byte. The error is returned before any row is kept.
pub fn build(key: &str) -> Result<DiskGrid, KnotError> {
    let hasher = KnotHasher::new();
    let mut grid = DiskGrid::new();

    for row in 0..GRID_SIZE {
        let digest = hasher.hash(&row_key(key, row))?;
        trace!(row, digest = %digest, "hashed row");
        for (col, bit) in digest.bits().enumerate() {
            if bit {
                grid.set(row, col, Cell::Set);
            }
        }
    }

    debug!(key, set_bits = grid.count_set(), "built disk grid");
    Ok(grid)
}
