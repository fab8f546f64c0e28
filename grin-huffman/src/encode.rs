//! GRIN encoder (compression).

use crate::config::GrinConfig;
use crate::frequency::count_frequencies;
use crate::symbol::Symbol;
use crate::tree::CodeTree;
use grin_core::bitstream::{BitReader, BitWriter};
use grin_core::error::Result;
use grin_core::traits::Encoder;
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::{debug, trace};

/// Statistics of one encode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Bytes read from the source.
    pub input_bytes: u64,
    /// Distinct byte values in the source.
    pub distinct_symbols: usize,
    /// Bits used by the serialized tree.
    pub tree_bits: u64,
    /// Bits used by the encoded body, EOF code included.
    pub body_bits: u64,
    /// Bytes written to the destination, padding included.
    pub output_bytes: u64,
}

impl EncodeSummary {
    /// Output size as a fraction of input size (0.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// GRIN encoder for compression.
#[derive(Debug, Clone, Default)]
pub struct GrinEncoder {
    config: GrinConfig,
}

impl GrinEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: GrinConfig) -> Self {
        Self { config }
    }

    /// Write a complete container for `source` using an existing tree.
    ///
    /// # Container Layout
    ///
    /// 1. 32-bit magic value
    /// 2. Serialized tree
    /// 3. One code per source byte, then the EOF code
    /// 4. Zero padding to the next byte boundary
    ///
    /// Every byte of `source` must have a leaf in `tree`; a byte without one
    /// is reported as [`GrinError::UnknownSymbol`](grin_core::GrinError::UnknownSymbol).
    pub fn encode_with_tree<R: Read, W: Write>(
        &self,
        tree: &CodeTree,
        source: R,
        dest: W,
    ) -> Result<EncodeSummary> {
        let mut writer = BitWriter::new(dest);
        writer.write_bits(self.config.magic, 32)?;

        tree.serialize(&mut writer)?;
        let header_bits = writer.bits_written();

        let codes = tree.code_table();
        debug!(
            leaves = codes.len(),
            depth = tree.depth(),
            tree_bits = header_bits - 32,
            "built code tree"
        );
        for (symbol, code) in codes.iter() {
            trace!(%symbol, %code, "code assigned");
        }

        let mut reader = BitReader::new(source);
        let mut input_bytes = 0u64;
        while let Some(byte) = reader.read_u8()? {
            codes.write_symbol(&mut writer, Symbol::from_byte(byte))?;
            input_bytes += 1;
        }
        codes.write_symbol(&mut writer, Symbol::EOF)?;

        let total_bits = writer.bits_written();
        writer.finish()?;

        let summary = EncodeSummary {
            input_bytes,
            distinct_symbols: codes.len().saturating_sub(1),
            tree_bits: header_bits - 32,
            body_bits: total_bits - header_bits,
            output_bytes: total_bits.div_ceil(8),
        };
        debug!(?summary, "encode finished");
        Ok(summary)
    }
}

impl Encoder for GrinEncoder {
    type Summary = EncodeSummary;

    /// Encode `source` in two passes: count frequencies, rewind, emit codes.
    fn encode<R: Read + Seek, W: Write>(&self, source: &mut R, dest: W) -> Result<EncodeSummary> {
        let start = source.stream_position()?;
        let table = count_frequencies(&mut *source)?;
        debug!(
            bytes = table.total(),
            distinct = table.len(),
            "counted symbol frequencies"
        );

        source.seek(SeekFrom::Start(start))?;
        let tree = CodeTree::from_frequencies(&table)?;
        self.encode_with_tree(&tree, source, dest)
    }
}
