//! Property-based tests for the coding invariants.

use huffstream::{
    decode, encode, CodeTable, CompressedData, DecodeError, FrequencyTable, HuffmanError,
    HuffmanTree, TreeShape,
};
use proptest::prelude::*;

fn roundtrip(data: &[u8]) -> Vec<u8> {
    let encoded = encode(data).unwrap();
    decode(
        &encoded.frequencies,
        encoded.packed.data_bits,
        &encoded.packed.bytes,
    )
    .unwrap()
}

/// Inputs drawn from a small alphabet so symbols repeat and trees get deep.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            8 => Just(b'e'),
            4 => Just(b't'),
            2 => Just(b'a'),
            1 => any::<u8>(),
        ],
        0..2048,
    )
}

proptest! {
    #[test]
    fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(roundtrip(&data), data);
    }

    #[test]
    fn prop_roundtrip_skewed(data in skewed_bytes()) {
        prop_assert_eq!(roundtrip(&data), data);
    }

    #[test]
    fn prop_packed_length_matches_bits(data in skewed_bytes()) {
        let encoded = encode(&data).unwrap();
        prop_assert_eq!(encoded.packed.bytes.len(), encoded.packed.data_bits.div_ceil(8));
        prop_assert_eq!(encoded.frequencies.total(), data.len() as u64);
    }

    #[test]
    fn prop_codes_prefix_free(data in prop::collection::vec(any::<u8>(), 2..1024)) {
        let table = CodeTable::from_tree(&HuffmanTree::from_bytes(&data));
        prop_assert!(table.is_prefix_free());
        prop_assert_eq!(table.len(), FrequencyTable::from_bytes(&data).distinct());
    }

    #[test]
    fn prop_never_expands_with_two_symbols(data in skewed_bytes()) {
        let freqs = FrequencyTable::from_bytes(&data);
        prop_assume!(freqs.distinct() >= 2);
        let encoded = encode(&data).unwrap();
        prop_assert!(encoded.packed.data_bits <= 8 * data.len());
    }

    #[test]
    fn prop_bits_match_code_lengths(data in skewed_bytes()) {
        let freqs = FrequencyTable::from_bytes(&data);
        let table = CodeTable::from_tree(&HuffmanTree::from_frequencies(&freqs));
        let encoded = encode(&data).unwrap();
        prop_assert_eq!(table.encoded_bits(&freqs), Some(encoded.packed.data_bits as u64));
    }

    #[test]
    fn prop_rebuild_is_deterministic(data in skewed_bytes()) {
        let first = encode(&data).unwrap();
        let second = encode(&data).unwrap();
        prop_assert_eq!(&first, &second);

        let rebuilt = FrequencyTable::from_entries(first.frequencies.entries()).unwrap();
        prop_assert_eq!(
            CodeTable::from_tree(&HuffmanTree::from_frequencies(&rebuilt)),
            CodeTable::from_tree(&HuffmanTree::from_frequencies(&first.frequencies))
        );
    }

    #[test]
    fn prop_truncation_detected(data in prop::collection::vec(any::<u8>(), 16..1024)) {
        let encoded = encode(&data).unwrap();
        prop_assume!(encoded.frequencies.distinct() >= 2);
        let bytes = &encoded.packed.bytes[..encoded.packed.bytes.len() - 1];
        let result = decode(&encoded.frequencies, encoded.packed.data_bits, bytes);
        prop_assert!(
            matches!(
                result,
                Err(HuffmanError::Decoding(DecodeError::BitCountOverflow { .. }))
            ),
            "truncated stream decoded: {:?}",
            result
        );
    }

    #[test]
    fn prop_container_roundtrip(data in skewed_bytes()) {
        let container = CompressedData::from(encode(&data).unwrap());
        let bytes = container.serialize().unwrap();
        prop_assert_eq!(CompressedData::deserialize(&bytes).unwrap(), container);
    }
}

#[test]
fn test_empty_input() {
    let encoded = encode(&[]).unwrap();
    assert_eq!(encoded.packed.data_bits, 0);
    assert!(encoded.packed.bytes.is_empty());
    assert!(encoded.frequencies.is_empty());
    assert_eq!(decode(&encoded.frequencies, 0, &[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_single_distinct_symbol() {
    let data = [0x41, 0x41, 0x41];
    let encoded = encode(&data).unwrap();

    let tree = HuffmanTree::from_frequencies(&encoded.frequencies);
    assert_eq!(tree.shape(), TreeShape::Single(0x41));
    let table = CodeTable::from_tree(&tree);
    assert_eq!(table.get(0x41).map(ToString::to_string).as_deref(), Some("0"));

    assert_eq!(encoded.packed.data_bits, 3);
    let decoded = decode(&encoded.frequencies, 3, &encoded.packed.bytes).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_skewed_input_is_smaller() {
    let data = b"aaaaaaaab";
    let encoded = encode(data).unwrap();
    assert!(encoded.packed.data_bits < 8 * 9);
}

#[test]
fn test_every_byte_value() {
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 3 + 17).collect();
    assert_eq!(roundtrip(&data), data);
}
