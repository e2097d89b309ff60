// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed parameters of the knot hash.
//!
//! These match the published reference behaviour; changing any of them
//! produces a different (and incompatible) hash.

/// Number of elements in the circular list being scrambled.
pub const LIST_LEN: usize = 256;

/// Number of passes over the length sequence.
pub const ROUNDS: usize = 64;

/// Number of sparse elements XOR-folded into each dense byte.
pub const FOLD_BLOCK: usize = 16;

/// Length of the dense digest in bytes (LIST_LEN / FOLD_BLOCK).
pub const DIGEST_LEN: usize = LIST_LEN / FOLD_BLOCK;

/// Number of bits in a dense digest.
pub const DIGEST_BITS: usize = DIGEST_LEN * 8;

/// Lengths appended to every input before scrambling.
pub const LENGTH_SUFFIX: [u8; 5] = [17, 31, 73, 47, 23];
