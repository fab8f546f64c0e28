//! Symbol frequency counting.

use crate::symbol::Symbol;
use grin_core::bitstream::BitReader;
use grin_core::error::Result;
use std::collections::BTreeMap;
use std::io::Read;

/// Occurrence counts of literal bytes.
///
/// Only bytes that occur have an entry, so a symbol is either absent or has
/// a positive count. EOF is never stored here; tree construction adds it.
/// Entries iterate in ascending symbol order, which fixes the order leaves
/// enter the construction queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.record(byte);
        }
        table
    }

    /// Count one occurrence of `byte`.
    pub fn record(&mut self, byte: u8) {
        let count = self.counts.entry(Symbol::from_byte(byte)).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Set the count of `byte`; a count of zero removes the entry.
    pub fn set(&mut self, byte: u8, count: u64) {
        let symbol = Symbol::from_byte(byte);
        if count == 0 {
            self.counts.remove(&symbol);
        } else {
            self.counts.insert(symbol, count);
        }
    }

    /// Count for `byte`, zero if it never occurred.
    pub fn get(&self, byte: u8) -> u64 {
        self.counts
            .get(&Symbol::from_byte(byte))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct bytes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no bytes were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<u8> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut table = Self::new();
        for byte in iter {
            table.record(byte);
        }
        table
    }
}

/// Build a frequency table by reading `reader` eight bits at a time until
/// it is exhausted.
pub fn count_frequencies<R: Read>(reader: R) -> Result<FrequencyTable> {
    let mut bits = BitReader::new(reader);
    let mut table = FrequencyTable::new();
    while let Some(byte) = bits.read_u8()? {
        table.record(byte);
    }
    Ok(table)
}
