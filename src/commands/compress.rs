//! Compress command.

use std::path::PathBuf;

use clap::Args;
use huffstream::{CodeTable, CompressedData, FrequencyTable, HuffmanCodec};
use tracing::info;

use super::{read_input, write_output, CliError};

/// Arguments for compress command.
#[derive(Args)]
pub struct CompressArgs {
    /// File to compress.
    pub input: PathBuf,

    /// Output path [default: <INPUT>.cmp]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the code assigned to every byte.
    #[arg(long)]
    pub show_codes: bool,
}

/// Compress a file into a container next to it.
pub fn compress(args: CompressArgs) -> Result<(), CliError> {
    let data = read_input(&args.input)?;

    let codec = HuffmanCodec::from_bytes(&data);
    let packed = codec.encode(&data).map_err(CliError::Coding)?;

    if args.show_codes && packed.data_bits > 0 {
        println!();
        print_codes(codec.frequencies(), codec.code_table());
    }
    println!();
    println!("Uncompressed data\t{} bytes", data.len());
    println!("Compressed data\t\t{} bytes", packed.bytes.len());
    println!("Frequency map size\t{}", codec.frequencies().distinct());

    let container = CompressedData {
        frequencies: codec.frequencies().clone(),
        packed,
    };
    let bytes = container.serialize().map_err(CliError::Coding)?;

    let output = args.output.unwrap_or_else(|| default_output(&args.input));
    write_output(&output, &bytes)?;
    info!(path = %output.display(), size = bytes.len(), "wrote container");

    println!();
    println!("Compression successful");
    Ok(())
}

fn default_output(input: &std::path::Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".cmp");
    PathBuf::from(name)
}

fn print_codes(frequencies: &FrequencyTable, table: &CodeTable) {
    println!(
        "{:<15}{:<15}{:<15}{:<15}",
        "ASCII Code", "Character", "Frequency", "Code"
    );
    for (byte, code) in table.iter() {
        println!(
            "{:<15}{:<15}{:<15}{:<15}",
            byte,
            printable(byte),
            frequencies[byte],
            code.to_string()
        );
    }
}

fn printable(byte: u8) -> String {
    match byte {
        b' ' => "' '".to_string(),
        b if b.is_ascii_graphic() => (b as char).to_string(),
        b => format!("\\x{b:02x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_output_appends_extension() {
        assert_eq!(
            default_output(Path::new("dir/notes.txt")),
            PathBuf::from("dir/notes.txt.cmp")
        );
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable(b'a'), "a");
        assert_eq!(printable(b' '), "' '");
        assert_eq!(printable(b'\n'), "\\x0a");
        assert_eq!(printable(0xff), "\\xff");
    }
}
