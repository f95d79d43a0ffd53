use tracing::{debug, warn};

use crate::bit_vec::Bits;
use crate::encoder::PackedBits;
use crate::error::{DecodeError, Result};
use crate::hufftree::{HuffNode, HuffmanTree, TreeShape};

pub fn unpack(packed: &PackedBits, tree: &HuffmanTree) -> Result<Vec<u8>> {
    unpack_slice(&packed.bytes, packed.data_bits, tree)
}

/// Walks `tree` over the first `data_bits` bits of `bytes`.
///
/// An empty tree decodes to nothing and a single-leaf tree to `data_bits`
/// copies of its symbol without reading the bits. Otherwise the walk
/// must land on a leaf exactly at the last data bit. For a non-empty tree
/// the output length must equal the tree's weight, the symbol total it was
/// built from.
pub fn unpack_slice(bytes: &[u8], data_bits: usize, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let decoded = match tree.shape() {
        TreeShape::Empty => return Ok(Vec::new()),
        TreeShape::Single(byte) => {
            check_bit_count(bytes, data_bits)?;
            // one bit per symbol, so the count is known before allocating
            check_length(tree.weight(), data_bits)?;
            vec![byte; data_bits]
        }
        TreeShape::General(root) => {
            let decoded = walk(root, bytes, data_bits)?;
            check_length(tree.weight(), decoded.len())?;
            decoded
        }
    };
    debug!(data_bits, output = decoded.len(), "unpacked bitstream");
    Ok(decoded)
}

fn overflow(bytes: &[u8], data_bits: usize) -> DecodeError {
    DecodeError::BitCountOverflow {
        data_bits,
        available: bytes.len().saturating_mul(8),
    }
}

fn check_bit_count(bytes: &[u8], data_bits: usize) -> std::result::Result<(), DecodeError> {
    if data_bits > bytes.len().saturating_mul(8) {
        return Err(warned(overflow(bytes, data_bits)));
    }
    Ok(())
}

fn check_length(expected: u64, decoded: usize) -> std::result::Result<(), DecodeError> {
    if decoded as u64 != expected {
        return Err(warned(DecodeError::LengthMismatch { expected, decoded }));
    }
    Ok(())
}

fn warned(error: DecodeError) -> DecodeError {
    warn!(error = %error, "failed to decode bitstream");
    error
}

fn walk(root: &HuffNode, bytes: &[u8], data_bits: usize) -> std::result::Result<Vec<u8>, DecodeError> {
    // surplus whole bytes and the padding bits are never read
    let bits = Bits::from_slice(bytes, data_bits).ok_or_else(|| warned(overflow(bytes, data_bits)))?;

    let mut result = Vec::new();
    let mut current_node = root;
    for bit in bits {
        // an internal node always has both children
        let Some(next) = current_node.child(bit) else {
            return Err(warned(DecodeError::IncompleteCode { data_bits }));
        };
        current_node = match next {
            HuffNode::Leaf { byte, .. } => {
                result.push(*byte);
                root
            }
            HuffNode::Internal { .. } => next,
        };
    }

    if !std::ptr::eq(current_node, root) {
        return Err(warned(DecodeError::IncompleteCode { data_bits }));
    }
    Ok(result)
}
