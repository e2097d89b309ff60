// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circular scrambler: a permutation of `0..N` plus a cursor.
//!
//! Each knot reverses a run of the list that may wrap past the end, then
//! moves the cursor forward by the run length plus the current skip.
//!
//! # Examples
//!
//! ```
//! use knot_grid::knot::CircularScrambler;
//!
//! let mut scrambler = CircularScrambler::<5>::new();
//! for length in [3, 4, 1, 5] {
//!     scrambler.apply_knot(length);
//! }
//! assert_eq!(scrambler.list(), &[3, 4, 2, 1, 0]);
//! assert_eq!(scrambler.position(), 4);
//! assert_eq!(scrambler.skip(), 4);
//! ```

/// Reverse `length` elements of `list` in place, starting at `position` and
/// wrapping past the last index back to 0.
///
/// Elements outside the run keep their circular order. A `length` of 0 or 1
/// leaves the list unchanged.
///
/// # Panics
///
/// Panics if `length > list.len()`.
pub fn tie(list: &mut [u8], position: usize, length: usize) {
    let n = list.len();
    assert!(
        length <= n,
        "Knot length out of range: {} > {}",
        length,
        n
    );
    if length < 2 {
        return;
    }

    let mut front = position % n;
    let mut back = (position + length - 1) % n;
    for _ in 0..length / 2 {
        list.swap(front, back);
        front = (front + 1) % n;
        back = (back + n - 1) % n;
    }
}

/// A fixed-size permutation with a moving cursor.
///
/// The list always holds each value of `0..N` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularScrambler<const N: usize> {
    list: [u8; N],
    position: usize,
    skip: usize,
}

impl<const N: usize> CircularScrambler<N> {
    /// Create a scrambler holding the identity permutation with the cursor at 0.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0 or larger than 256 (values must fit in a byte).
    pub fn new() -> Self {
        assert!(
            N > 0 && N <= 256,
            "Scrambler size out of range: {} not in 1..=256",
            N
        );
        let mut list = [0u8; N];
        for (i, slot) in list.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            list,
            position: 0,
            skip: 0,
        }
    }

    /// Tie one knot of the given length at the cursor, then advance the cursor.
    ///
    /// # Panics
    ///
    /// Panics if `length > N`.
    pub fn apply_knot(&mut self, length: usize) {
        tie(&mut self.list, self.position, length);
        self.position = (self.position + length + self.skip) % N;
        self.skip += 1;
    }

    /// Tie one knot per length, in order.
    pub fn apply_knots(&mut self, lengths: &[u8]) {
        for &length in lengths {
            self.apply_knot(length as usize);
        }
    }

    /// Index where the next knot starts.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current skip size.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Current permutation.
    pub fn list(&self) -> &[u8; N] {
        &self.list
    }

    /// Consume the scrambler, yielding the sparse result.
    pub fn into_list(self) -> [u8; N] {
        self.list
    }
}

impl<const N: usize> Default for CircularScrambler<N> {
    fn default() -> Self {
        Self::new()
    }
}
