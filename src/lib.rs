//! # huffstream
//!
//! Huffman coding over bytes. A [`FrequencyTable`] is the only thing the
//! decoder needs besides the packed bits: the tree is rebuilt from it with a
//! fixed tie-breaking order, so encoder and decoder always agree.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffstream::{decode, encode};
//!
//! let data = b"so much words wow many compression";
//! let encoded = encode(data)?;
//! assert!(encoded.packed.data_bits < 8 * data.len());
//!
//! let decoded = decode(
//!     &encoded.frequencies,
//!     encoded.packed.data_bits,
//!     &encoded.packed.bytes,
//! )?;
//! assert_eq!(decoded, data);
//! # Ok::<(), huffstream::HuffmanError>(())
//! ```

pub mod code_table;
pub mod compressed_data;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;

// Internal modules - not part of public API
mod bit_vec;
mod min_heap;

// Re-export main types for convenience
pub use code_table::{Code, CodeTable};
pub use compressed_data::CompressedData;
pub use encoder::PackedBits;
pub use error::{DecodeError, HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::{decode, encode, Encoded, HuffmanCodec};
pub use hufftree::{HuffNode, HuffmanTree, TreeShape};
