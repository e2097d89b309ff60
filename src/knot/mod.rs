// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot hash.
//!
//! - `scrambler`: circular reversal and the cursor-carrying scrambler
//! - `hasher`: rounds, length encoding and XOR folding
//! - `digest`: the 16-byte dense result

pub mod constants;
pub mod digest;
pub mod hasher;
pub mod scrambler;

pub use constants::*;
pub use digest::Digest;
pub use hasher::{encode_lengths, fold, knot_hash, KnotHasher};
pub use scrambler::{tie, CircularScrambler};
