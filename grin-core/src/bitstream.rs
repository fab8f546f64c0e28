//! Bit-level I/O for the GRIN container.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! quantities that are not byte aligned: single tree-shape bits, 9-bit
//! symbols and variable-length Huffman codes.
//!
//! # Bit Ordering
//!
//! GRIN uses MSB-first (Most Significant Bit first) ordering within bytes.
//! The first bit written lands in bit 7 of the first byte, and multi-bit
//! values are written most significant bit first. This differs from DEFLATE
//! and LZH, which pack LSB-first.
//!
//! # Exhaustion
//!
//! The reader reports end of source as `Ok(None)` rather than as an error.
//! Running out of input is an expected event (it ends frequency counting and
//! encoding), so callers decide for themselves whether it is a failure.
//!
//! # Example
//!
//! ```
//! use grin_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();  // Write 3 bits
//! writer.write_bits(0b1100, 4).unwrap(); // Write 4 bits
//! let output = writer.finish().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! // Reading bits
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), Some(0b101));
//! assert_eq!(reader.read_bits(4).unwrap(), Some(0b1100));
//! ```

use crate::error::{GrinError, Result};
use std::io::{ErrorKind, Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// One byte is buffered at a time and served MSB-first. Wrap unbuffered
/// sources such as files in a `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current byte.
    buffer: u8,
    /// Number of unread bits left in `buffer`.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
    /// Set once the underlying reader returned end of file.
    exhausted: bool,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
            exhausted: false,
        }
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.total_bits_read
    }

    /// Load the next byte if the current one is used up.
    ///
    /// Returns `false` once the source is exhausted.
    fn fill_buffer(&mut self) -> Result<bool> {
        if self.bits_in_buffer > 0 {
            return Ok(true);
        }
        if self.exhausted {
            return Ok(false);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(false);
                }
                Ok(_) => {
                    self.buffer = byte[0];
                    self.bits_in_buffer = 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read a single bit.
    ///
    /// Returns `Ok(None)` when the source is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        if !self.fill_buffer()? {
            return Ok(None);
        }

        self.bits_in_buffer -= 1;
        self.total_bits_read += 1;
        Ok(Some((self.buffer >> self.bits_in_buffer) & 1 == 1))
    }

    /// Read up to 32 bits, most significant bit first.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (0-32)
    ///
    /// # Returns
    ///
    /// The bits as a u32 with the first bit read in the highest position, or
    /// `None` if the source ended before `count` bits were available. Bits
    /// consumed by a short read are lost.
    pub fn read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        let mut value = 0u32;
        for _ in 0..count {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | bit as u32,
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }

    /// Read eight bits as a byte.
    pub fn read_u8(&mut self) -> Result<Option<u8>> {
        Ok(self.read_bits(8)?.map(|v| v as u8))
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits MSB-first in a one-byte buffer and writes
/// each byte as soon as it is complete. Call [`finish`](Self::finish) when
/// done to pad and write the last partial byte; dropping the writer does the
/// same on a best-effort basis.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer; taken by `finish`.
    writer: Option<W>,
    /// Partial byte (MSB-first).
    buffer: u8,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write the buffered byte to the underlying writer.
    fn flush_byte(&mut self) -> Result<()> {
        let byte = self.buffer;
        self.buffer = 0;
        self.bits_in_buffer = 0;

        match self.writer.as_mut() {
            Some(writer) => writer.write_all(&[byte])?,
            None => return Err(GrinError::internal("bit writer used after finish")),
        }
        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer == 8 {
            self.flush_byte()?;
        }
        Ok(())
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write
    /// * `count` - Number of bits to write (0-32)
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    /// Pad to byte boundary with zeros.
    ///
    /// Padding bits are not counted by [`bits_written`](Self::bits_written).
    pub fn align_to_byte(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            self.buffer <<= 8 - self.bits_in_buffer;
            self.flush_byte()?;
        }
        Ok(())
    }

    /// Pad the final byte, flush, and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.align_to_byte()?;
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| GrinError::internal("bit writer already finished"))?;
        writer.flush()?;
        Ok(writer)
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        // Best-effort pad and flush on drop
        if self.writer.is_some() {
            let _ = self.align_to_byte();
            if let Some(writer) = self.writer.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}
