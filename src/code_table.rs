use std::fmt;

use tracing::debug;

use crate::bit_vec::BitVec;
use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::hufftree::{HuffNode, HuffmanTree, TreeShape};

/// A codeword: the path from the root to a leaf, 0 = left, 1 = right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    bits: BitVec,
}

impl Code {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.bits.is_prefix_of(&other.bits)
    }

    pub(crate) fn bits(&self) -> &BitVec {
        &self.bits
    }
}

/// Renders as a string of `0` and `1`.
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Code per symbol; `None` for symbols that never occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; SYMBOL_COUNT];
        match tree.shape() {
            TreeShape::Empty => {}
            TreeShape::Single(byte) => {
                // no edge to walk, but a codeword can't be empty
                codes[byte as usize] = Some(Code {
                    bits: BitVec::from_iter([false]),
                });
            }
            TreeShape::General(root) => {
                let mut path = BitVec::new();
                collect_codes(root, &mut path, &mut codes);
            }
        }
        let table = CodeTable { codes };
        debug!(codes = table.len(), "generated code table");
        table
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes[byte as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Symbols with their codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_ref().map(|c| (byte as u8, c)))
    }

    /// Checks that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.iter().flatten().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Exact number of bits packing data with these counts would produce.
    ///
    /// Returns `None` if a counted symbol has no code.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> Option<u64> {
        frequencies.entries().try_fold(0u64, |acc, (byte, count)| {
            let code = self.get(byte)?;
            Some(acc + count * code.len() as u64)
        })
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        CodeTable::from_tree(tree)
    }
}

fn collect_codes(node: &HuffNode, path: &mut BitVec, codes: &mut [Option<Code>]) {
    match node {
        HuffNode::Leaf { byte, .. } => {
            codes[*byte as usize] = Some(Code { bits: path.clone() });
        }
        HuffNode::Internal { left, right, .. } => {
            path.push_bit(false);
            collect_codes(left, path, codes);
            path.pop();

            path.push_bit(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_bytes(data))
    }

    fn code_str(table: &CodeTable, byte: u8) -> Option<String> {
        table.get(byte).map(Code::to_string)
    }

    #[test]
    fn test_empty_tree_has_no_codes() {
        let table = table_for(&[]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!((0..=255u8).all(|b| table.get(b).is_none()));
    }

    #[test]
    fn test_single_symbol_gets_zero() {
        let table = table_for(&[0x41, 0x41, 0x41]);
        assert_eq!(table.len(), 1);
        assert_eq!(code_str(&table, 0x41).as_deref(), Some("0"));
    }

    #[test]
    fn test_left_is_zero_right_is_one() {
        // tree: (c, (a, b))
        let table = table_for(b"abcc");
        assert_eq!(code_str(&table, b'c').as_deref(), Some("0"));
        assert_eq!(code_str(&table, b'a').as_deref(), Some("10"));
        assert_eq!(code_str(&table, b'b').as_deref(), Some("11"));
        assert_eq!(table.get(b'd'), None);
    }

    #[test]
    fn test_iter_ascending() {
        let table = table_for(b"zyxzz");
        let symbols: Vec<u8> = table.iter().map(|(b, _)| b).collect();
        assert_eq!(symbols, vec![b'x', b'y', b'z']);
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for(b"she sells sea shells by the sea shore");
        assert!(table.is_prefix_free());
        assert!(table.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn test_encoded_bits_matches_weighted_length() {
        let data = b"aaaaaaaab";
        let freqs = FrequencyTable::from_bytes(data);
        let table = CodeTable::from_tree(&HuffmanTree::from_frequencies(&freqs));
        assert_eq!(table.encoded_bits(&freqs), Some(9));

        let other = FrequencyTable::from_bytes(b"c");
        assert_eq!(table.encoded_bits(&other), None);
    }

    #[test]
    fn test_skewed_weights_give_long_codes() {
        // fibonacci-like weights produce a maximally deep tree
        let mut data = Vec::new();
        let weights = [1usize, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
        for (byte, &w) in weights.iter().enumerate() {
            data.extend(std::iter::repeat(byte as u8).take(w));
        }
        let table = table_for(&data);
        let longest = table.iter().map(|(_, c)| c.len()).max().unwrap();
        assert_eq!(longest, weights.len() - 1);
        assert!(table.is_prefix_free());
    }
}
