// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flood-fill statistics
//!
//! Counters are bumped by the region counter as it scans and expands.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Regions found.
    Regions,
    /// Cells marked as visited.
    MarkedCells,
    /// Wavefronts processed, summed over all regions.
    Levels,
    /// In-bounds neighbour cells examined.
    NeighbourProbes,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FillStatistics {
    stats: [u64; Counters::COUNT],
}

impl FillStatistics {
    pub fn new() -> Self {
        FillStatistics::default()
    }

    pub(crate) fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for FillStatistics {
    /// Format as "regions=3 marked_cells=10 ...".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}
