//! CLI command implementations.

mod compress;
mod decompress;

use std::io;
use std::path::{Path, PathBuf};

use huffstream::HuffmanError;
use thiserror::Error;

pub use compress::{compress, CompressArgs};
pub use decompress::{decompress, DecompressArgs};

/// Failures a command reports, each with its own exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: file not found", .0.display())]
    NotFound(PathBuf),

    #[error("error reading {}: {source}", path.display())]
    Reading { path: PathBuf, source: io::Error },

    #[error("error reading {}: {source}", path.display())]
    Container {
        path: PathBuf,
        source: HuffmanError,
    },

    #[error("error writing {}: {source}", path.display())]
    Writing { path: PathBuf, source: io::Error },

    #[error("error coding: {0}")]
    Coding(HuffmanError),

    #[error("error decoding: {0}")]
    Decoding(HuffmanError),
}

impl CliError {
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::NotFound(_) => 1,
            CliError::Reading { .. } | CliError::Container { .. } => 2,
            CliError::Writing { .. } => 3,
            CliError::Coding(_) => 4,
            CliError::Decoding(_) => 5,
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::NotFound(path.to_path_buf()),
        _ => CliError::Reading {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, data).map_err(|source| CliError::Writing {
        path: path.to_path_buf(),
        source,
    })
}
