//! The GRIN prefix-code tree.
//!
//! A tree is either built from a [`FrequencyTable`] (encoding) or read from
//! its serialized form (decoding). It is immutable afterwards.
//!
//! # Construction
//!
//! Classic Huffman merging: one leaf per counted byte (ascending symbol
//! order), then an EOF leaf of weight 1. The two lowest-weight nodes are
//! repeatedly merged into an inner node whose left child is the first one
//! removed. Equal weights leave the queue in insertion order, so a table
//! always produces the same tree.
//!
//! # Serialized Form
//!
//! Preorder, MSB-first bits:
//!
//! ```text
//! leaf  := 0 <symbol:9>
//! inner := 1 <left> <right>
//! ```
//!
//! There is no length field; the structure terminates itself.

use crate::code::{Code, CodeTable};
use crate::config::GrinConfig;
use crate::frequency::FrequencyTable;
use crate::queue::NodeQueue;
use crate::symbol::Symbol;
use grin_core::bitstream::{BitReader, BitWriter};
use grin_core::error::{GrinError, Result};
use std::io::{Read, Write};

/// A node of a code tree.
///
/// Left corresponds to bit 0 and right to bit 1, both in the serialized
/// form and in codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: Symbol,
    },
    /// Branch with exactly two children.
    Inner {
        /// Child reached by bit 0.
        left: Box<Node>,
        /// Child reached by bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: Symbol) -> Self {
        Self::Leaf { symbol }
    }

    /// Create an inner node.
    pub fn inner(left: Node, right: Node) -> Self {
        Self::Inner {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A prefix-code tree over the GRIN symbol alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
}

impl CodeTree {
    #[cfg(test)]
    pub(crate) fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Build the tree for a frequency table.
    ///
    /// The result always contains exactly one EOF leaf. An empty table
    /// gives a single-leaf tree whose EOF code is empty; any other table
    /// gives at least two leaves.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
        let mut queue = NodeQueue::with_capacity(table.len() + 1);
        for (symbol, count) in table.iter() {
            queue.push(Node::leaf(symbol), count);
        }
        queue.push(Node::leaf(Symbol::EOF), 1);

        while queue.len() > 1 {
            let (first, first_weight) = queue
                .pop()
                .ok_or_else(|| GrinError::internal("node queue drained during merge"))?;
            let (second, second_weight) = queue
                .pop()
                .ok_or_else(|| GrinError::internal("node queue drained during merge"))?;
            queue.push(
                Node::inner(first, second),
                first_weight.saturating_add(second_weight),
            );
        }

        let (root, _) = queue
            .pop()
            .ok_or_else(|| GrinError::internal("node queue empty after merge"))?;
        Ok(Self { root })
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Write the serialized form of this tree.
    pub fn serialize<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        write_node(&self.root, writer)
    }

    /// Read a serialized tree.
    ///
    /// Fails with a format error if the stream ends inside the tree, a leaf
    /// holds a value above 256, a symbol appears twice, the nesting exceeds
    /// `config.max_tree_depth`, or there is no EOF leaf.
    pub fn deserialize<R: Read>(reader: &mut BitReader<R>, config: &GrinConfig) -> Result<Self> {
        let mut parser = TreeParser {
            reader,
            max_depth: config.max_tree_depth,
            seen: [false; Symbol::COUNT],
        };
        let root = parser.read_node(0)?;

        if !parser.seen[Symbol::EOF.index()] {
            return Err(GrinError::MissingEofLeaf);
        }
        Ok(Self { root })
    }

    /// Compute the code of every leaf.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let mut path = Vec::new();
        collect_codes(&self.root, &mut path, &mut table);
        table
    }

    /// Leaf symbols in preorder.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        collect_symbols(&self.root, &mut symbols);
        symbols
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.symbols().len()
    }

    /// Length of the longest code.
    pub fn depth(&self) -> usize {
        node_depth(&self.root)
    }

    /// Number of bits in the serialized form.
    pub fn serialized_bits(&self) -> u64 {
        let leaves = self.leaf_count() as u64;
        // Every leaf is 1 + 9 bits and a full binary tree has leaves - 1 inner nodes
        leaves * (1 + Symbol::BITS as u64) + leaves.saturating_sub(1)
    }

    /// Decode one symbol by walking from the root.
    ///
    /// Returns `Ok(None)` if the source is exhausted before the first bit of
    /// a code, and a [`GrinError::TruncatedBody`] if it runs out part way
    /// through one. A single-leaf tree yields its symbol without reading.
    pub fn decode_symbol<R: Read>(&self, reader: &mut BitReader<R>) -> Result<Option<Symbol>> {
        let mut node = &self.root;
        let mut at_root = true;
        loop {
            match node {
                Node::Leaf { symbol } => return Ok(Some(*symbol)),
                Node::Inner { left, right } => match reader.read_bit()? {
                    Some(false) => node = left.as_ref(),
                    Some(true) => node = right.as_ref(),
                    None if at_root => return Ok(None),
                    None => return Err(GrinError::truncated_body(reader.bit_position())),
                },
            }
            at_root = false;
        }
    }
}

fn write_node<W: Write>(node: &Node, writer: &mut BitWriter<W>) -> Result<()> {
    match node {
        Node::Leaf { symbol } => {
            writer.write_bit(false)?;
            writer.write_bits(symbol.value() as u32, Symbol::BITS)
        }
        Node::Inner { left, right } => {
            writer.write_bit(true)?;
            write_node(left, writer)?;
            write_node(right, writer)
        }
    }
}

/// Recursive-descent reader for the serialized tree.
struct TreeParser<'a, R: Read> {
    reader: &'a mut BitReader<R>,
    max_depth: usize,
    seen: [bool; Symbol::COUNT],
}

impl<R: Read> TreeParser<'_, R> {
    fn read_bit(&mut self) -> Result<bool> {
        self.reader
            .read_bit()?
            .ok_or_else(|| GrinError::truncated_tree(self.reader.bit_position()))
    }

    fn read_node(&mut self, depth: usize) -> Result<Node> {
        if !self.read_bit()? {
            return self.read_leaf();
        }

        // Children of this node sit one level deeper
        if depth >= self.max_depth {
            return Err(GrinError::tree_too_deep(self.max_depth));
        }
        let left = self.read_node(depth + 1)?;
        let right = self.read_node(depth + 1)?;
        Ok(Node::inner(left, right))
    }

    fn read_leaf(&mut self) -> Result<Node> {
        let raw = self
            .reader
            .read_bits(Symbol::BITS)?
            .ok_or_else(|| GrinError::truncated_tree(self.reader.bit_position()))?
            as u16;
        let symbol = Symbol::try_from_raw(raw)
            .ok_or_else(|| GrinError::invalid_symbol(raw, self.reader.bit_position()))?;

        if std::mem::replace(&mut self.seen[symbol.index()], true) {
            return Err(GrinError::duplicate_symbol(raw));
        }
        Ok(Node::leaf(symbol))
    }
}

fn collect_codes(node: &Node, path: &mut Vec<bool>, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol } => table.insert(*symbol, Code::from_bits(path.clone())),
        Node::Inner { left, right } => {
            path.push(false);
            collect_codes(left, path, table);
            path.pop();
            path.push(true);
            collect_codes(right, path, table);
            path.pop();
        }
    }
}

fn collect_symbols(node: &Node, symbols: &mut Vec<Symbol>) {
    match node {
        Node::Leaf { symbol } => symbols.push(*symbol),
        Node::Inner { left, right } => {
            collect_symbols(left, symbols);
            collect_symbols(right, symbols);
        }
    }
}

fn node_depth(node: &Node) -> usize {
    match node {
        Node::Leaf { .. } => 0,
        Node::Inner { left, right } => 1 + node_depth(left).max(node_depth(right)),
    }
}
