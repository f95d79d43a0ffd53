use huffstream::{CompressedData, HuffmanCodec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";
    let data = sample_text.as_bytes();

    println!("Sample text: {} bytes", data.len());

    let codec = HuffmanCodec::from_bytes(data);
    println!("{}", codec.tree());

    for (byte, code) in codec.code_table().iter() {
        println!("{:?}\t{}", byte as char, code);
    }

    let packed = codec.encode(data)?;
    let container = CompressedData {
        frequencies: codec.frequencies().clone(),
        packed,
    };
    let bytes = container.serialize()?;

    let compression_ratio = bytes.len() as f64 / data.len() as f64;
    println!(
        "Compressed to: {} bytes ({:.1}% of original, {} data bits)",
        bytes.len(),
        compression_ratio * 100.0,
        container.packed.data_bits
    );

    // the decoder only sees the serialized container
    let restored = CompressedData::deserialize(&bytes)?;
    let decoded = HuffmanCodec::from_frequencies(restored.frequencies).decode(&restored.packed)?;

    if decoded != data {
        return Err("Decompression verification failed".into());
    }
    println!("Decompression successful! Data matches exactly.");

    Ok(())
}
