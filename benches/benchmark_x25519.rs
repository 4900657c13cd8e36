use brine::x25519::scalarmult_base;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_x25519(c: &mut Criterion) {
    let scalar = [0x42u8; 32];

    c.bench_function("x25519 scalarmult_base", |b| {
        b.iter(|| scalarmult_base(black_box(&scalar)))
    });
}

criterion_group!(benches, bench_x25519);
criterion_main!(benches);
