use brine::poly1305::mac::authenticate;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_poly1305(c: &mut Criterion) {
    let key = [0x42u8; 32];
    let message = vec![0u8; 1024];

    c.bench_function("poly1305 64 bytes", |b| {
        b.iter(|| authenticate(black_box(&message[..64]), black_box(&key)))
    });

    c.bench_function("poly1305 1 KiB", |b| {
        b.iter(|| authenticate(black_box(&message), black_box(&key)))
    });
}

criterion_group!(benches, bench_poly1305);
criterion_main!(benches);
