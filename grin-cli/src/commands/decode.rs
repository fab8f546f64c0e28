//! Decode command implementation.

use grin_huffman::{Result, decode_file};
use std::path::Path;

pub fn cmd_decode(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let summary = decode_file(input, output)?;

    if !quiet {
        println!(
            "{} -> {}: {} bytes",
            input.display(),
            output.display(),
            summary.output_bytes
        );
    }
    Ok(())
}
