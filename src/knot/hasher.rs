// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot hash: repeated rounds of circular reversal, folded into a dense digest.
//!
//! The input's character codes, followed by [`LENGTH_SUFFIX`], form the
//! length sequence. One round ties a knot for every length in order; the
//! scrambler's cursor carries over between rounds. After [`ROUNDS`] rounds
//! the sparse result is folded 16 elements at a time with XOR.
//!
//! # Examples
//!
//! ```
//! use knot_grid::knot::knot_hash;
//!
//! let digest = knot_hash("AoC 2017").unwrap();
//! assert_eq!(digest.to_hex(), "33efeb34ea91902bb2f59c9920caa6cd");
//! ```

use crate::error::KnotError;
use crate::knot::constants::{DIGEST_LEN, FOLD_BLOCK, LENGTH_SUFFIX, LIST_LEN, ROUNDS};
use crate::knot::{CircularScrambler, Digest};

/// Convert `input` to its length sequence: character codes then the fixed suffix.
///
/// Fails with [`KnotError::NonAsciiInput`] on the first character whose code
/// point does not fit in a byte.
pub fn encode_lengths(input: &str) -> Result<Vec<u8>, KnotError> {
    let mut lengths = Vec::with_capacity(input.len() + LENGTH_SUFFIX.len());
    for (index, character) in input.chars().enumerate() {
        let code =
            u8::try_from(character).map_err(|_| KnotError::NonAsciiInput { character, index })?;
        lengths.push(code);
    }
    lengths.extend_from_slice(&LENGTH_SUFFIX);
    Ok(lengths)
}

/// XOR-fold a sparse result into a dense digest, one byte per 16-element block.
pub fn fold(sparse: &[u8; LIST_LEN]) -> Digest {
    let mut dense = [0u8; DIGEST_LEN];
    for (byte, block) in dense.iter_mut().zip(sparse.chunks_exact(FOLD_BLOCK)) {
        *byte = block.iter().fold(0, |acc, &value| acc ^ value);
    }
    Digest::from_bytes(dense)
}

/// Runs the scrambling rounds over a 256-element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnotHasher {
    rounds: usize,
}

impl KnotHasher {
    /// Hasher with the standard 64 rounds.
    pub const fn new() -> Self {
        Self { rounds: ROUNDS }
    }

    /// Hasher with a custom round count.
    ///
    /// Only `ROUNDS` produces the reference hash. A single round over raw
    /// lengths reproduces the original one-pass knot.
    pub const fn with_rounds(rounds: usize) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Scramble the identity list with `lengths`, once per round, and return
    /// the sparse result. No suffix is added.
    pub fn sparse(&self, lengths: &[u8]) -> [u8; LIST_LEN] {
        let mut scrambler = CircularScrambler::<LIST_LEN>::new();
        for _ in 0..self.rounds {
            scrambler.apply_knots(lengths);
        }
        scrambler.into_list()
    }

    /// Hash raw bytes. The suffix is appended here.
    pub fn hash_bytes(&self, bytes: &[u8]) -> Digest {
        let mut lengths = Vec::with_capacity(bytes.len() + LENGTH_SUFFIX.len());
        lengths.extend_from_slice(bytes);
        lengths.extend_from_slice(&LENGTH_SUFFIX);
        fold(&self.sparse(&lengths))
    }

    /// Hash a string whose characters all have code points up to 255.
    pub fn hash(&self, input: &str) -> Result<Digest, KnotError> {
        let lengths = encode_lengths(input)?;
        Ok(fold(&self.sparse(&lengths)))
    }
}

impl Default for KnotHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard 64-round knot hash of `input`.
pub fn knot_hash(input: &str) -> Result<Digest, KnotError> {
    KnotHasher::new().hash(input)
}
