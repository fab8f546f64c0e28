//! # GRIN Core
//!
//! Core components for the GRIN compressor.
//!
//! This crate provides the fundamental building blocks shared by the codec
//! and the command-line tool:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for tree shapes, 9-bit symbols and Huffman codes
//! - [`traits`]: Whole-stream encoder/decoder traits
//! - [`error`]: Error types and their classification
//!
//! ## Architecture
//!
//! GRIN is layered the same way as a classic archiver:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Driver                                              │
//! │     grin CLI (encode, decode, info, test)               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency table, code tree, GRIN container          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, errors, traits                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use grin_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0x736, 32).unwrap();
//! writer.write_bit(true).unwrap();
//! let data = writer.finish().unwrap();
//! assert_eq!(data, vec![0x00, 0x00, 0x07, 0x36, 0x80]);
//!
//! let mut reader = BitReader::new(Cursor::new(data));
//! assert_eq!(reader.read_bits(32).unwrap(), Some(0x736));
//! assert_eq!(reader.read_bit().unwrap(), Some(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{ErrorKind, GrinError, Result};
pub use traits::{Decoder, Encoder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{ErrorKind, GrinError, Result};
    pub use crate::traits::{Decoder, Encoder};
}
