// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot hash digests and region counting over the disk grid they define.
//!
//! # Pipeline
//!
//! Data flows strictly forward through four stages:
//!
//! 1. **CircularScrambler** ([`knot::CircularScrambler`]): a permutation of
//!    `0..256` with a cursor; each knot reverses a wrap-around run.
//! 2. **KnotHasher** ([`knot::KnotHasher`]): 64 rounds of knots driven by the
//!    input bytes plus a fixed suffix, XOR-folded into a 16-byte digest.
//! 3. **Grid builder** ([`grid::build`]): row `i` of a 128x128 bit grid is the
//!    digest of `"{key}-{i}"`, most significant bit first.
//! 4. **Region counter** ([`regions::RegionCounter`]): row-major scan plus
//!    wavefront flood fill, counting 4-connected regions of set cells.
//!
//! # Errors
//!
//! Characters above U+00FF cannot be hashed and surface as
//! [`KnotError::NonAsciiInput`]. Out-of-range grid access is a logic error
//! and panics.
//!
//! # Example
//!
//! ```
//! use knot_grid::analyze;
//!
//! let report = analyze("flqrgnkx").unwrap();
//! assert_eq!(report.set_bits, 8108);
//! assert_eq!(report.regions, 1242);
//! ```

pub mod error;
pub mod grid;
pub mod knot;
pub mod regions;
pub mod report;

// Re-export commonly used types
pub use error::KnotError;
pub use grid::{BitGrid, Cell, DiskGrid};
pub use knot::{knot_hash, Digest, KnotHasher};
pub use report::{analyze, DiskReport};
