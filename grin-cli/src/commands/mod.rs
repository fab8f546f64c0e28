//! Command implementations for GRIN CLI.
//!
//! Commands return [`GrinError`](grin_huffman::GrinError) rather than a boxed
//! error so that `main` can word its message by error kind.

pub mod decode;
pub mod encode;
pub mod info;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use info::cmd_info;
pub use test::cmd_test;
