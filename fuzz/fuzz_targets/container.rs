#![no_main]

use huffstream::{CompressedData, HuffmanCodec};
use libfuzzer_sys::fuzz_target;

// Arbitrary containers must be rejected or decoded, never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(container) = CompressedData::deserialize(data) {
        let codec = HuffmanCodec::from_frequencies(container.frequencies);
        let _ = codec.decode(&container.packed);
    }
});
