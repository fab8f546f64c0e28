//! Info command implementation.

use grin_core::BitReader;
use grin_huffman::{GrinDecoder, GrinError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn cmd_info(input: &Path) -> Result<()> {
    let file = File::open(input).map_err(|e| GrinError::open(input, e))?;
    let size = file.metadata()?.len();

    let decoder = GrinDecoder::default();
    let mut reader = BitReader::new(BufReader::new(file));
    let tree = decoder.read_header(&mut reader)?;
    let header_bits = reader.bit_position();

    println!("GRIN Information");
    println!("================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", size);
    println!("Magic: {:#010x}", decoder.config().magic);
    println!();
    println!("Code tree:");
    println!("  Symbols: {} (including EOF)", tree.leaf_count());
    println!("  Depth: {}", tree.depth());
    println!("  Tree size: {} bits", header_bits - 32);
    println!(
        "  Body size: {} bits (including padding)",
        (size * 8).saturating_sub(header_bits)
    );

    println!();
    println!("{:>14}  {:>4}  Code", "Symbol", "Bits");
    println!("{}", "-".repeat(40));
    for (symbol, code) in tree.code_table().iter() {
        println!("{:>14}  {:>4}  {}", symbol.to_string(), code.len(), code);
    }
    Ok(())
}
