use std::ops::Index;

use crate::error::{HuffmanError, Result};

/// Number of distinct symbols in the byte alphabet.
pub const SYMBOL_COUNT: usize = 256;

/// Occurrence count per byte value.
///
/// This is the only state shared between the encode and decode paths: both
/// rebuild the same tree from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; SYMBOL_COUNT],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in bytes {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Counts `bytes` in shards on the rayon pool and sums the shard tables.
    #[cfg(feature = "parallel")]
    pub fn from_bytes_parallel(bytes: &[u8]) -> Self {
        use rayon::prelude::*;

        const SHARD: usize = 64 * 1024;
        bytes
            .par_chunks(SHARD)
            .map(Self::from_bytes)
            .reduce(Self::new, |mut acc, shard| {
                acc.merge(&shard);
                acc
            })
    }

    /// Rebuilds a table from persisted `(symbol, count)` pairs.
    ///
    /// Zero counts are accepted and ignored. A symbol listed twice, or counts
    /// whose sum does not fit in a `u64`, are errors.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut table = Self::new();
        let mut seen = [false; SYMBOL_COUNT];
        let mut total = 0u64;
        for (byte, count) in entries {
            total = total
                .checked_add(count)
                .ok_or_else(|| HuffmanError::Format("symbol counts overflow u64".to_string()))?;
            if seen[byte as usize] {
                return Err(HuffmanError::Format(format!(
                    "symbol {byte} listed more than once"
                )));
            }
            seen[byte as usize] = true;
            table.counts[byte as usize] = count;
        }
        Ok(table)
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Adds `other` into `self`. Summing is order-independent, so shards can
    /// be merged in any order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (count, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Non-zero entries in ascending symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != 0)
            .map(|(byte, &count)| (byte as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u64;

    fn index(&self, byte: u8) -> &u64 {
        &self.counts[byte as usize]
    }
}

impl From<&[u8]> for FrequencyTable {
    fn from(bytes: &[u8]) -> Self {
        FrequencyTable::from_bytes(bytes)
    }
}
