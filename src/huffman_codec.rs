use tracing::debug;

use crate::code_table::CodeTable;
use crate::decoder;
use crate::encoder::{self, PackedBits};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;

/// Everything a decoder needs: the counts the tree is rebuilt from and the
/// packed bitstream with its exact length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub frequencies: FrequencyTable,
    pub packed: PackedBits,
}

/// A tree and its code table, built once from a frequency table.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    encode_table: CodeTable,
}

impl HuffmanCodec {
    pub fn from_frequencies(frequencies: FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let encode_table = CodeTable::from_tree(&tree);
        HuffmanCodec {
            frequencies,
            tree,
            encode_table,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        #[cfg(feature = "parallel")]
        let frequencies = FrequencyTable::from_bytes_parallel(data);
        #[cfg(not(feature = "parallel"))]
        let frequencies = FrequencyTable::from_bytes(data);
        Self::from_frequencies(frequencies)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.encode_table
    }

    /// Packs `data`. Every byte must have been counted in this codec's table.
    pub fn encode(&self, data: &[u8]) -> Result<PackedBits> {
        encoder::pack(data, &self.encode_table)
    }

    /// Unpacks `packed`, which must hold exactly the symbols this codec's
    /// table counted.
    pub fn decode(&self, packed: &PackedBits) -> Result<Vec<u8>> {
        decoder::unpack(packed, &self.tree)
    }
}

/// Counts `data`, builds a code from the counts and packs `data` with it.
pub fn encode(data: &[u8]) -> Result<Encoded> {
    let codec = HuffmanCodec::from_bytes(data);
    let packed = codec.encode(data)?;
    debug!(
        original = data.len(),
        compressed = packed.bytes.len(),
        "encoded"
    );
    Ok(Encoded {
        frequencies: codec.frequencies,
        packed,
    })
}

/// Rebuilds the tree from `frequencies` and unpacks `data_bits` bits of `bytes`.
///
/// Unless the table is empty, the output must be `frequencies.total()` bytes long.
pub fn decode(frequencies: &FrequencyTable, data_bits: usize, bytes: &[u8]) -> Result<Vec<u8>> {
    let tree = HuffmanTree::from_frequencies(frequencies);
    decoder::unpack_slice(bytes, data_bits, &tree)
}
