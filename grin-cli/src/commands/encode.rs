//! Encode command implementation.

use grin_huffman::{Result, encode_file};
use std::path::Path;

pub fn cmd_encode(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let summary = encode_file(input, output)?;

    if !quiet {
        print!(
            "{} -> {}: {} -> {} bytes",
            input.display(),
            output.display(),
            summary.input_bytes,
            summary.output_bytes
        );
        if summary.input_bytes > 0 {
            println!(" ({:.1}% saved)", (1.0 - summary.ratio()) * 100.0);
        } else {
            println!();
        }
    }
    Ok(())
}
