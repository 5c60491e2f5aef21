//! Byte frequency counting

use crate::common::MAX_SYMBOLS;

/// Occurrence count for each of the 256 byte values
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; MAX_SYMBOLS],
}

impl FrequencyTable {
    /// Count every byte of `data` exactly once
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; MAX_SYMBOLS];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Wrap an existing set of counts, indexed by byte value
    pub fn from_counts(counts: [u64; MAX_SYMBOLS]) -> Self {
        Self { counts }
    }

    /// Occurrences of `byte`
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when every slot is zero
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Number of byte values with a nonzero count
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// `(byte, count)` pairs with nonzero count, in byte-value order
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
    }
}
