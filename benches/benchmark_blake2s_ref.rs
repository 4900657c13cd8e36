use blake2::{Blake2s256, Digest};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_blake2s_crate(c: &mut Criterion) {
    let data = [0u8; 64];

    c.bench_function("blake2::Blake2s256 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Blake2s256::new();
            hasher.update(black_box(&data));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_blake2s_crate);
criterion_main!(benches);
