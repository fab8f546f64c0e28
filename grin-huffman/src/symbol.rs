//! The 9-bit GRIN symbol alphabet.
//!
//! Values 0-255 are literal bytes and 256 is the end-of-stream marker, so a
//! symbol never fits in a `u8`.

use std::fmt;

/// One of the 257 code alphabet symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u16);

impl Symbol {
    /// Width of a serialized symbol.
    pub const BITS: u8 = 9;

    /// Number of symbols in the alphabet.
    pub const COUNT: usize = 257;

    /// End-of-stream marker.
    pub const EOF: Symbol = Symbol(0x100);

    /// Symbol for a literal byte.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// Symbol for a raw 9-bit value, or `None` above 256.
    pub const fn try_from_raw(value: u16) -> Option<Self> {
        if value <= Self::EOF.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw value (0-256).
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position of this symbol in dense per-symbol tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the end-of-stream marker.
    pub const fn is_eof(self) -> bool {
        self.0 == Self::EOF.0
    }

    /// The literal byte, or `None` for EOF.
    pub const fn as_byte(self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            Some(self.0 as u8)
        }
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_byte() {
            None => write!(f, "EOF"),
            Some(byte) if byte.is_ascii_graphic() => write!(f, "'{}' ({:#04x})", byte as char, byte),
            Some(byte) => write!(f, "{:#04x}", byte),
        }
    }
}
