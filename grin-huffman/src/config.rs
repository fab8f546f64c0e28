//! GRIN container configuration.

use crate::symbol::Symbol;

/// Magic value at the start of every GRIN container.
pub const GRIN_MAGIC: u32 = 0x0000_0736;

/// Deepest leaf a tree over the full 257-symbol alphabet can have.
pub const MAX_TREE_DEPTH: usize = Symbol::COUNT - 1;

/// GRIN container parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrinConfig {
    /// 32-bit value written before the serialized tree.
    pub magic: u32,
    /// Maximum leaf depth accepted when reading a serialized tree.
    pub max_tree_depth: usize,
}

impl GrinConfig {
    /// Standard GRIN configuration.
    ///
    /// - Magic `0x00000736`
    /// - Tree depth limited to 256, enough for any 257-leaf tree
    pub const STANDARD: Self = Self {
        magic: GRIN_MAGIC,
        max_tree_depth: MAX_TREE_DEPTH,
    };

    /// Create the standard configuration.
    pub const fn new() -> Self {
        Self::STANDARD
    }

    /// Use a different magic value.
    pub const fn with_magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    /// Use a different tree depth limit.
    pub const fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }
}

impl Default for GrinConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
