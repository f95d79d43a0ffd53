//! huffstream - compress and decompress files with Huffman coding.
//!
//! # Usage
//!
//! ```bash
//! # Writes report.txt.cmp
//! huffstream compress report.txt --show-codes
//!
//! # Writes report-clone.txt
//! huffstream decompress report.txt.cmp
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// huffstream: byte-oriented Huffman compression
#[derive(Parser)]
#[command(name = "huffstream")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a .cmp container
    Compress(commands::CompressArgs),

    /// Restore a file from a .cmp container
    Decompress(commands::DecompressArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress(args) => commands::compress(args),
        Commands::Decompress(args) => commands::decompress(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}
