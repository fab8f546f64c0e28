//! Core traits for whole-stream codecs.
//!
//! A GRIN encoder has to see its source twice (once to count symbol
//! frequencies, once to emit codes), so encoding needs `Read + Seek`.
//! Decoding is a single forward pass over any `Read`.

use crate::error::Result;
use std::io::{Cursor, Read, Seek, Write};

/// A whole-stream encoder (compressor).
pub trait Encoder {
    /// Statistics reported after a successful encode.
    type Summary;

    /// Encode everything from the current position of `source` to its end.
    ///
    /// # Arguments
    ///
    /// * `source` - Input data; rewound to its starting position between passes
    /// * `dest` - Where to write the container
    fn encode<R: Read + Seek, W: Write>(&self, source: &mut R, dest: W) -> Result<Self::Summary>;

    /// Encode an in-memory buffer (convenience method).
    fn encode_all(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.encode(&mut Cursor::new(input), &mut output)?;
        Ok(output)
    }
}

/// A whole-stream decoder (decompressor).
pub trait Decoder {
    /// Statistics reported after a successful decode.
    type Summary;

    /// Decode one container from `source` into `dest`.
    fn decode<R: Read, W: Write>(&self, source: R, dest: W) -> Result<Self::Summary>;

    /// Decode an in-memory container (convenience method).
    fn decode_all(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode(input, &mut output)?;
        Ok(output)
    }
}
