//! On-disk container for an encoded stream.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! magic      "HUF1"
//! entries    u16               non-zero symbols, 0..=256
//! entry      u8 symbol, u64 count   (repeated, ascending symbol)
//! data_bits  u64
//! byte_len   u64
//! bytes      [u8; byte_len]
//! ```

use std::io::{self, Cursor, Read, Write};

use tracing::debug;

use crate::encoder::PackedBits;
use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::huffman_codec::Encoded;

pub const MAGIC: [u8; 4] = *b"HUF1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    pub frequencies: FrequencyTable,
    pub packed: PackedBits,
}

impl CompressedData {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&MAGIC)?;

        // write count of used symbols, then each (symbol, count) pair
        let entry_count = self.frequencies.distinct() as u16;
        writer.write_all(&entry_count.to_le_bytes())?;
        for (byte, count) in self.frequencies.entries() {
            writer.write_all(&[byte])?;
            writer.write_all(&count.to_le_bytes())?;
        }

        let data_bits = self.packed.data_bits as u64;
        writer.write_all(&data_bits.to_le_bytes())?;

        let data_len = self.packed.bytes.len() as u64;
        writer.write_all(&data_len.to_le_bytes())?;
        writer.write_all(&self.packed.bytes)?;

        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<CompressedData> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(HuffmanError::Format(format!("bad magic {magic:02x?}")));
        }

        let entry_count = read_u16(reader)? as usize;
        if entry_count > SYMBOL_COUNT {
            return Err(HuffmanError::Format(format!(
                "{entry_count} frequency entries, at most {SYMBOL_COUNT} allowed"
            )));
        }
        let mut entries = Vec::with_capacity(entry_count);
        for _ in 0..entry_count {
            let mut byte = [0u8; 1];
            reader.read_exact(&mut byte)?;
            let count = read_u64(reader)?;
            entries.push((byte[0], count));
        }
        let frequencies = FrequencyTable::from_entries(entries)?;

        let data_bits = to_usize(read_u64(reader)?)?;
        let data_len = to_usize(read_u64(reader)?)?;
        if data_len != data_bits.div_ceil(8) {
            return Err(HuffmanError::Format(format!(
                "{data_len} data bytes cannot hold exactly {data_bits} bits"
            )));
        }

        let mut bytes = Vec::new();
        reader.by_ref().take(data_len as u64).read_to_end(&mut bytes)?;
        if bytes.len() != data_len {
            return Err(HuffmanError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {data_len} data bytes, found {}", bytes.len()),
            )));
        }

        Ok(CompressedData {
            frequencies,
            packed: PackedBits::new(bytes, data_bits),
        })
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        debug!(size = bytes.len(), "serialized container");
        Ok(bytes)
    }

    /// Parses a whole container; trailing bytes are an error.
    pub fn deserialize(data: &[u8]) -> Result<CompressedData> {
        let mut cursor = Cursor::new(data);
        let compressed = Self::read_from(&mut cursor)?;
        let trailing = data.len() as u64 - cursor.position();
        if trailing != 0 {
            return Err(HuffmanError::Format(format!(
                "{trailing} trailing bytes after container"
            )));
        }
        Ok(compressed)
    }
}

impl From<Encoded> for CompressedData {
    fn from(encoded: Encoded) -> Self {
        CompressedData {
            frequencies: encoded.frequencies,
            packed: encoded.packed,
        }
    }
}

impl From<CompressedData> for Encoded {
    fn from(compressed: CompressedData) -> Self {
        Encoded {
            frequencies: compressed.frequencies,
            packed: compressed.packed,
        }
    }
}

fn read_u16<R: Read>(reader: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn to_usize(value: u64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| HuffmanError::Format(format!("length {value} does not fit in memory")))
}
