use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dm_decode::{decode, decode_batch, randomize_255};

fn ascii_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| b'A' + 1 + (i % 26) as u8).collect()
}

fn c40_payload(triples: usize) -> Vec<u8> {
    // "ABC" per codeword pair
    let v: u16 = 1600 * 14 + 40 * 15 + 16 + 1;
    let mut codewords = vec![230];
    for _ in 0..triples {
        codewords.push((v >> 8) as u8);
        codewords.push((v & 0xFF) as u8);
    }
    codewords.push(254);
    codewords
}

fn base256_payload(len: usize) -> Vec<u8> {
    let mut codewords = vec![231, randomize_255(0, 2)];
    for i in 0..len {
        codewords.push(randomize_255((i % 256) as u8, 3 + i));
    }
    codewords
}

fn bench_decode_ascii(c: &mut Criterion) {
    let codewords = ascii_payload(1556);
    c.bench_function("decode_ascii_1556", |b| b.iter(|| decode(black_box(&codewords))));
}

fn bench_decode_c40(c: &mut Criterion) {
    let codewords = c40_payload(700);
    c.bench_function("decode_c40_700_triples", |b| {
        b.iter(|| decode(black_box(&codewords)))
    });
}

fn bench_decode_base256(c: &mut Criterion) {
    let codewords = base256_payload(1500);
    c.bench_function("decode_base256_1500", |b| {
        b.iter(|| decode(black_box(&codewords)))
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let symbols: Vec<Vec<u8>> = (0..256).map(|i| ascii_payload(64 + i % 64)).collect();
    let refs: Vec<&[u8]> = symbols.iter().map(|s| s.as_slice()).collect();
    c.bench_function("decode_batch_256_symbols", |b| {
        b.iter(|| decode_batch(black_box(&refs)))
    });
}

criterion_group!(
    benches,
    bench_decode_ascii,
    bench_decode_c40,
    bench_decode_base256,
    bench_decode_batch
);
criterion_main!(benches);
