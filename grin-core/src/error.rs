//! Error types for GRIN operations.
//!
//! Every failure is fatal to the operation that raised it. Variants are
//! grouped into three kinds (see [`ErrorKind`]) so that callers can tell
//! "the file could not be opened" apart from "this is not a GRIN file".

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`GrinError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source or destination could not be opened, read or written.
    Resource,
    /// The input is not a well-formed GRIN container.
    Format,
    /// An internal invariant was violated.
    Logic,
}

/// The main error type for GRIN operations.
#[derive(Debug, Error)]
pub enum GrinError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened or created.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Source and destination resolve to the same file.
    #[error("Input and output are the same file: {}", path.display())]
    SamePath {
        /// The shared path.
        path: PathBuf,
    },

    /// Container does not start with the expected magic value.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic value.
        expected: u32,
        /// Value found in the stream.
        found: u32,
    },

    /// Stream ended before the 32-bit magic value was complete.
    #[error("Truncated header: fewer than 32 bits available")]
    TruncatedHeader,

    /// Stream ended inside the serialized code tree.
    #[error("Truncated code tree at bit position {bit_position}")]
    TruncatedTree {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// A serialized leaf holds a value outside the symbol alphabet.
    #[error("Invalid symbol {value:#x} in code tree at bit position {bit_position}")]
    InvalidSymbol {
        /// Raw 9-bit value that was read.
        value: u16,
        /// Bit position just after the value.
        bit_position: u64,
    },

    /// Two leaves of a serialized tree carry the same symbol.
    #[error("Duplicate symbol {value:#x} in code tree")]
    DuplicateSymbol {
        /// The repeated symbol value.
        value: u16,
    },

    /// Serialized tree nests deeper than any valid tree can.
    #[error("Code tree exceeds maximum depth {max_depth}")]
    TreeTooDeep {
        /// Configured depth limit.
        max_depth: usize,
    },

    /// Serialized tree has no EOF leaf, so the body could never terminate.
    #[error("Code tree has no EOF leaf")]
    MissingEofLeaf,

    /// Stream ended part way through a code in the body.
    #[error("Truncated body at bit position {bit_position}")]
    TruncatedBody {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// Body ended on a code boundary without an EOF code.
    #[error("Body ended at bit position {bit_position} without an EOF code")]
    MissingEof {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },

    /// A symbol to encode has no code in the tree.
    #[error("No code for symbol {value:#x}")]
    UnknownSymbol {
        /// The symbol value.
        value: u16,
    },

    /// Internal invariant violation.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

/// Result type alias for GRIN operations.
pub type Result<T> = std::result::Result<T, GrinError>;

impl GrinError {
    /// Create an open error for `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a same-path error for `path`.
    pub fn same_path(path: impl Into<PathBuf>) -> Self {
        Self::SamePath { path: path.into() }
    }

    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create a truncated tree error.
    pub fn truncated_tree(bit_position: u64) -> Self {
        Self::TruncatedTree { bit_position }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(value: u16, bit_position: u64) -> Self {
        Self::InvalidSymbol {
            value,
            bit_position,
        }
    }

    /// Create a duplicate symbol error.
    pub fn duplicate_symbol(value: u16) -> Self {
        Self::DuplicateSymbol { value }
    }

    /// Create a tree-too-deep error.
    pub fn tree_too_deep(max_depth: usize) -> Self {
        Self::TreeTooDeep { max_depth }
    }

    /// Create a truncated body error.
    pub fn truncated_body(bit_position: u64) -> Self {
        Self::TruncatedBody { bit_position }
    }

    /// Create a missing EOF error.
    pub fn missing_eof(bit_position: u64) -> Self {
        Self::MissingEof { bit_position }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(value: u16) -> Self {
        Self::UnknownSymbol { value }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Open { .. } | Self::SamePath { .. } => ErrorKind::Resource,
            Self::InvalidMagic { .. }
            | Self::TruncatedHeader
            | Self::TruncatedTree { .. }
            | Self::InvalidSymbol { .. }
            | Self::DuplicateSymbol { .. }
            | Self::TreeTooDeep { .. }
            | Self::MissingEofLeaf
            | Self::TruncatedBody { .. }
            | Self::MissingEof { .. } => ErrorKind::Format,
            Self::UnknownSymbol { .. } | Self::Internal { .. } => ErrorKind::Logic,
        }
    }

    /// True if the input is not a valid GRIN container.
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}
