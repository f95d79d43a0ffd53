use tracing::debug;

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};

/// Packed codewords plus the exact number of meaningful bits.
///
/// Bits are stored MSB first; `bytes.len() == data_bits.div_ceil(8)` and the
/// padding in the last byte is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub data_bits: usize,
}

impl PackedBits {
    pub fn new(bytes: Vec<u8>, data_bits: usize) -> Self {
        PackedBits { bytes, data_bits }
    }

    /// Number of padding bits in the final byte.
    pub fn padding_bits(&self) -> usize {
        (8 - self.data_bits % 8) % 8
    }
}

impl From<BitVec> for PackedBits {
    fn from(bits: BitVec) -> Self {
        let data_bits = bits.bit_count();
        PackedBits {
            bytes: bits.into_bytes(),
            data_bits,
        }
    }
}

/// Concatenates the code of every byte of `data`, in order.
///
/// Fails without producing output if a byte has no code in `table`.
pub fn pack(data: &[u8], table: &CodeTable) -> Result<PackedBits> {
    let mut bit_vec = BitVec::new();
    for &byte in data {
        let code = table.get(byte).ok_or(HuffmanError::Encoding { byte })?;
        bit_vec.extend_from(code.bits());
    }
    let packed = PackedBits::from(bit_vec);
    debug!(
        input = data.len(),
        data_bits = packed.data_bits,
        bytes = packed.bytes.len(),
        "packed bitstream"
    );
    Ok(packed)
}
