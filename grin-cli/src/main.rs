//! GRIN CLI - Huffman compression with an in-band EOF symbol
//!
//! A Pure Rust implementation of the GRIN container format.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{cmd_decode, cmd_encode, cmd_info, cmd_test};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grin")]
#[command(author, version, about = "GRIN - Pure Rust Huffman compressor")]
#[command(long_about = "
GRIN compresses a file with a static Huffman code built from its byte
frequencies. The code tree is stored in the output, followed by the coded
bytes and an end-of-file code.

Examples:
  grin encode notes.txt notes.grin
  grin decode notes.grin notes.txt
  grin info notes.grin
  grin test notes.grin
  GRIN_LOG=debug grin encode notes.txt notes.grin
")]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a GRIN container
    #[command(alias = "e")]
    Encode {
        /// File to compress
        input: PathBuf,

        /// Container to write
        output: PathBuf,
    },

    /// Decompress a GRIN container
    #[command(alias = "d")]
    Decode {
        /// Container to read
        input: PathBuf,

        /// File to write
        output: PathBuf,
    },

    /// Show the header and code table of a container
    #[command(alias = "i")]
    Info {
        /// Container to inspect
        input: PathBuf,
    },

    /// Decode a container without writing the output
    #[command(alias = "t")]
    Test {
        /// Container to test
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let (input, result) = match &cli.command {
        Commands::Encode { input, output } => (input, cmd_encode(input, output, cli.quiet)),
        Commands::Decode { input, output } => (input, cmd_decode(input, output, cli.quiet)),
        Commands::Info { input } => (input, cmd_info(input)),
        Commands::Test { input } => (input, cmd_test(input)),
    };

    if let Err(e) = result {
        eprintln!("{}", utils::describe_error(&e, input));
        std::process::exit(1);
    }
}
