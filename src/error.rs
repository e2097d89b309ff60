// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recoverable errors.
//!
//! Only bad caller input is reported here. Out-of-range grid access is a
//! broken invariant and panics instead.

use thiserror::Error;

/// Errors returned by the hashing and grid pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnotError {
    /// A character outside `0..=255` was fed to the knot hash.
    #[error("knot hash only supports 8-bit characters: {character:?} at index {index}")]
    NonAsciiInput { character: char, index: usize },

    /// A hex string could not be parsed as a digest.
    #[error("invalid digest: {reason}")]
    InvalidDigest { reason: String },
}
