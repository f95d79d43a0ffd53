//! Error types for huffstream.

use thiserror::Error;

/// Errors surfaced by the coding engine and the container format.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// A symbol in the input has no code in the table it is encoded with.
    #[error("byte {byte:#04x} has no entry in the code table")]
    Encoding {
        /// The offending symbol.
        byte: u8,
    },

    /// The bitstream does not decode cleanly against the rebuilt tree.
    #[error("decoding failed: {0}")]
    Decoding(#[from] DecodeError),

    /// A serialized container is malformed.
    #[error("invalid container: {0}")]
    Format(String),

    /// Reading or writing a container failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ways a packed bitstream can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{data_bits} data bits claimed but only {available} bits present")]
    BitCountOverflow { data_bits: usize, available: usize },

    #[error("bitstream ended mid-code after {data_bits} bits")]
    IncompleteCode { data_bits: usize },

    /// The stream decoded cleanly but not to as many symbols as the
    /// frequency table counted.
    #[error("decoded {decoded} symbols but the frequency table counts {expected}")]
    LengthMismatch { expected: u64, decoded: usize },
}

/// Result type for coding operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
