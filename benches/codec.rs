use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use huffstream::{decode, encode, CodeTable, FrequencyTable, HuffmanTree};

fn sample_text(len: usize) -> Vec<u8> {
    let text: &[u8] = b"The quick brown fox jumps over the lazy dog. \
        Huffman encoding is a greedy algorithm that builds optimal prefix codes. ";
    text.iter().copied().cycle().take(len).collect()
}

fn tree_building(c: &mut Criterion) {
    let input = sample_text(64 * 1024);
    let freqs = FrequencyTable::from_bytes(&input);

    c.bench_function("frequency count 64K", |b| {
        b.iter(|| FrequencyTable::from_bytes(black_box(&input)))
    });

    c.bench_function("tree + code table", |b| {
        b.iter(|| CodeTable::from_tree(&HuffmanTree::from_frequencies(black_box(&freqs))))
    });
}

fn coding(c: &mut Criterion) {
    let input = sample_text(256 * 1024);
    let encoded = encode(&input).unwrap();

    let mut group = c.benchmark_group("huffman");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("encode 256K", |b| b.iter(|| encode(black_box(&input))));

    group.bench_function("decode 256K", |b| {
        b.iter(|| {
            decode(
                black_box(&encoded.frequencies),
                encoded.packed.data_bits,
                black_box(&encoded.packed.bytes),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, tree_building, coding);
criterion_main!(benches);
