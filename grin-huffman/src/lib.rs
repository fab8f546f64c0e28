//! # GRIN-Huffman: Pure Rust GRIN Compression
//!
//! This crate implements the GRIN container: static Huffman coding over
//! byte values with an in-band end-of-file symbol.
//!
//! ## Container Format
//!
//! All fields are packed MSB-first with no alignment between them:
//!
//! - **Magic**: 32-bit value `0x00000736`
//! - **Tree**: preorder; a leaf is bit `0` plus a 9-bit symbol, an inner
//!   node is bit `1` followed by its left then right subtree
//! - **Body**: one code per input byte, then the code for EOF (symbol 256)
//! - **Padding**: zero bits up to the next byte boundary
//!
//! Because EOF is part of the alphabet, no length field is needed and the
//! decoder never has to guess where padding starts.
//!
//! ## Example
//!
//! ```rust
//! use grin_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! assert_eq!(&compressed[..4], &[0x00, 0x00, 0x07, 0x36]);
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod code;
mod config;
mod decode;
mod encode;
mod frequency;
mod queue;
mod symbol;
mod tree;

pub use code::{Code, CodeTable};
pub use config::{GRIN_MAGIC, GrinConfig, MAX_TREE_DEPTH};
pub use decode::{DecodeSummary, GrinDecoder};
pub use encode::{EncodeSummary, GrinEncoder};
pub use frequency::{FrequencyTable, count_frequencies};
pub use grin_core::{Decoder, Encoder, ErrorKind, GrinError, Result};
pub use symbol::Symbol;
pub use tree::{CodeTree, Node};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{info, warn};

/// Compress a buffer into a GRIN container.
///
/// # Example
///
/// ```rust
/// use grin_huffman::compress;
///
/// let compressed = compress(b"aab").unwrap();
/// assert_eq!(
///     compressed,
///     vec![0x00, 0x00, 0x07, 0x36, 0x8C, 0x31, 0x89, 0x00, 0x2C]
/// );
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    GrinEncoder::default().encode_all(data)
}

/// Decompress a GRIN container.
///
/// Bytes after the padding of the container are ignored.
///
/// # Example
///
/// ```rust
/// use grin_huffman::{decompress, GrinError};
///
/// let data = [0x00, 0x00, 0x07, 0x36, 0x40, 0x00];
/// assert!(decompress(&data).unwrap().is_empty());
///
/// let err = decompress(b"not grin").unwrap_err();
/// assert!(matches!(err, GrinError::InvalidMagic { .. }));
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    GrinDecoder::default().decode_all(data)
}

/// Compress the file at `input` into a new container at `output`.
///
/// `output` is created or truncated only after `input` has been opened, and
/// never when both name the same file. If encoding fails after that point
/// the partial output file is removed.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<EncodeSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = File::open(input).map_err(|e| GrinError::open(input, e))?;
    ensure_distinct(input, output)?;
    let dest = File::create(output).map_err(|e| GrinError::open(output, e))?;

    let summary = GrinEncoder::default()
        .encode(&mut BufReader::new(source), BufWriter::new(dest))
        .inspect_err(|_| discard_partial(output))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        input_bytes = summary.input_bytes,
        output_bytes = summary.output_bytes,
        "encoded file"
    );
    Ok(summary)
}

/// Decompress the container at `input` into a new file at `output`.
///
/// The header is validated before `output` is created, so a file that is
/// not a GRIN container leaves `output` untouched. Decoding a file onto
/// itself is rejected. If the body turns out to be malformed the partial
/// output file is removed.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<DecodeSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = File::open(input).map_err(|e| GrinError::open(input, e))?;
    let mut reader = grin_core::BitReader::new(BufReader::new(source));

    let decoder = GrinDecoder::default();
    let tree = decoder.read_header(&mut reader)?;

    ensure_distinct(input, output)?;
    let dest = File::create(output).map_err(|e| GrinError::open(output, e))?;
    let output_bytes = decoder
        .decode_body(&tree, &mut reader, BufWriter::new(dest))
        .inspect_err(|_| discard_partial(output))?;

    let summary = DecodeSummary {
        output_bytes,
        leaf_count: tree.leaf_count(),
        input_bits: reader.bit_position(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        output_bytes,
        "decoded file"
    );
    Ok(summary)
}

/// Refuse to truncate `input` by creating `output` over it.
fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let Ok(output) = fs::canonicalize(output) else {
        // output does not exist yet
        return Ok(());
    };
    if fs::canonicalize(input).map_err(|e| GrinError::open(input, e))? == output {
        return Err(GrinError::same_path(output));
    }
    Ok(())
}

fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "could not remove partial output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"").unwrap();
        assert_eq!(compressed, vec![0x00, 0x00, 0x07, 0x36, 0x40, 0x00]);
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original).unwrap();

        // One bit per byte plus a small header
        assert!(compressed.len() < original.len() / 6);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }
}
