//! GRIN decoder (decompression).
//!
//! Decoding runs in two phases: the header (magic value and serialized
//! tree) is parsed completely before any body bit is read. The body is
//! then decoded one symbol at a time until the EOF code. Bits after the EOF
//! code are padding and are never read.

use crate::config::GrinConfig;
use crate::tree::CodeTree;
use grin_core::bitstream::{BitReader, BitWriter};
use grin_core::error::{GrinError, Result};
use grin_core::traits::Decoder;
use std::io::{Read, Write};
use tracing::debug;

/// Statistics of one decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Bytes written to the destination.
    pub output_bytes: u64,
    /// Leaves in the container's tree, EOF included.
    pub leaf_count: usize,
    /// Bits consumed from the source, up to and including the EOF code.
    pub input_bits: u64,
}

/// GRIN decoder for decompression.
#[derive(Debug, Clone, Default)]
pub struct GrinDecoder {
    config: GrinConfig,
}

impl GrinDecoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: GrinConfig) -> Self {
        Self { config }
    }

    /// The decoder's configuration.
    pub fn config(&self) -> &GrinConfig {
        &self.config
    }

    /// Check the magic value and read the code tree.
    pub fn read_header<R: Read>(&self, reader: &mut BitReader<R>) -> Result<CodeTree> {
        let magic = reader.read_bits(32)?.ok_or(GrinError::TruncatedHeader)?;
        if magic != self.config.magic {
            return Err(GrinError::invalid_magic(self.config.magic, magic));
        }

        let tree = CodeTree::deserialize(reader, &self.config)?;
        debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            header_bits = reader.bit_position(),
            "read container header"
        );
        Ok(tree)
    }

    /// Decode the body that follows a header into `dest`.
    ///
    /// Returns the number of bytes written. Running out of input before the
    /// EOF code is a format error, whether it happens between codes
    /// ([`GrinError::MissingEof`]) or inside one ([`GrinError::TruncatedBody`]).
    pub fn decode_body<R: Read, W: Write>(
        &self,
        tree: &CodeTree,
        reader: &mut BitReader<R>,
        dest: W,
    ) -> Result<u64> {
        let mut writer = BitWriter::new(dest);
        let mut output_bytes = 0u64;

        loop {
            let symbol = tree
                .decode_symbol(reader)?
                .ok_or_else(|| GrinError::missing_eof(reader.bit_position()))?;
            match symbol.as_byte() {
                Some(byte) => {
                    writer.write_bits(byte as u32, 8)?;
                    output_bytes += 1;
                }
                None => break,
            }
        }

        writer.finish()?;
        Ok(output_bytes)
    }
}

impl Decoder for GrinDecoder {
    type Summary = DecodeSummary;

    fn decode<R: Read, W: Write>(&self, source: R, dest: W) -> Result<DecodeSummary> {
        let mut reader = BitReader::new(source);
        let tree = self.read_header(&mut reader)?;
        let output_bytes = self.decode_body(&tree, &mut reader, dest)?;

        let summary = DecodeSummary {
            output_bytes,
            leaf_count: tree.leaf_count(),
            input_bits: reader.bit_position(),
        };
        debug!(?summary, "decode finished");
        Ok(summary)
    }
}
