//! Per-symbol bit codes derived from a code tree.

use crate::symbol::Symbol;
use grin_core::bitstream::BitWriter;
use grin_core::error::{GrinError, Result};
use std::fmt;
use std::io::Write;

/// Path from the root to one leaf: `false` for left, `true` for right.
///
/// Codes can be longer than any machine word (a skewed 257-leaf tree is 256
/// deep), so the bits are kept in a vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub(crate) fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the code of a single-leaf tree's root.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits in emission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Write this code's bits.
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        for bit in self.bits() {
            writer.write_bit(bit)?;
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping for every leaf of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    pub(crate) fn new() -> Self {
        Self {
            codes: vec![None; Symbol::COUNT],
        }
    }

    pub(crate) fn insert(&mut self, symbol: Symbol, code: Code) {
        self.codes[symbol.index()] = Some(code);
    }

    /// Code for `symbol`, if the tree has a leaf for it.
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes[symbol.index()].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().enumerate().filter_map(|(value, code)| {
            let symbol = Symbol::try_from_raw(value as u16)?;
            code.as_ref().map(|code| (symbol, code))
        })
    }

    /// Write the code for `symbol`.
    pub fn write_symbol<W: Write>(&self, writer: &mut BitWriter<W>, symbol: Symbol) -> Result<()> {
        self.get(symbol)
            .ok_or_else(|| GrinError::unknown_symbol(symbol.value()))?
            .write_to(writer)
    }
}
