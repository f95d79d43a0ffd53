#![no_main]

use huffstream::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = encode(data).expect("every counted byte has a code");
    let decoded = decode(
        &encoded.frequencies,
        encoded.packed.data_bits,
        &encoded.packed.bytes,
    )
    .expect("freshly encoded stream decodes");

    assert_eq!(data, decoded.as_slice());
});
