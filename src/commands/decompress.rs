//! Decompress command.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Args;
use huffstream::{CompressedData, HuffmanCodec};
use tracing::info;

use super::{read_input, write_output, CliError};

/// Arguments for decompress command.
#[derive(Args)]
pub struct DecompressArgs {
    /// Container to decompress.
    pub input: PathBuf,

    /// Output path [default: <STEM>-clone.<EXT> without .cmp]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Restore the original file from a container.
pub fn decompress(args: DecompressArgs) -> Result<(), CliError> {
    let raw = read_input(&args.input)?;
    let container = CompressedData::deserialize(&raw).map_err(|source| CliError::Container {
        path: args.input.clone(),
        source,
    })?;

    let codec = HuffmanCodec::from_frequencies(container.frequencies);
    let data = codec.decode(&container.packed).map_err(CliError::Decoding)?;

    let output = args.output.unwrap_or_else(|| clone_path(&args.input));
    write_output(&output, &data)?;
    info!(path = %output.display(), size = data.len(), "restored file");

    println!();
    println!("Decompression successful");
    Ok(())
}

/// `dir/a.txt.cmp` -> `dir/a-clone.txt`: `-clone` goes after the first dot
/// separated part of the file name and a trailing `.cmp` is dropped.
fn clone_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = name.split('.');
    let mut clone = parts.next().unwrap_or_default().to_string();
    clone.push_str("-clone");
    for part in parts {
        clone.push('.');
        clone.push_str(part);
    }
    if clone.ends_with(".cmp") {
        clone.truncate(clone.len() - ".cmp".len());
    }

    input.with_file_name(OsString::from(clone))
}
