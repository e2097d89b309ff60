// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense knot hash digest.

use crate::error::KnotError;
use crate::knot::constants::{DIGEST_BITS, DIGEST_LEN};
use std::fmt;
use std::str::FromStr;

/// A 16-byte dense digest.
///
/// Displays as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Iterate over all 128 bits, most significant bit of each byte first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..DIGEST_BITS).map(move |i| (self.0[i / 8] >> (7 - i % 8)) & 1 != 0)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn to_hex(&self) -> String {
        format!("{:x}", self)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Digest {
    type Err = KnotError;

    /// Parse 32 hex digits (either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(KnotError::InvalidDigest {
                reason: format!("expected {} hex digits, got {:?}", DIGEST_LEN * 2, s),
            });
        }
        if let Some(offset) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(KnotError::InvalidDigest {
                reason: format!("non-hex character at offset {}", offset),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[2 * i..2 * i + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| KnotError::InvalidDigest {
                reason: format!("bad hex pair {:?} at offset {}", pair, 2 * i),
            })?;
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}
