use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sd_core::config::UnsupportedPolicy;
use sd_encode::Encoder;
use sd_encode::batch::encode_lines;

const PANGRAM: &str = "The Quick Brown Fox Jumps Over The Lazy Dog ";

fn bench_encode(c: &mut Criterion) {
    let text = PANGRAM.repeat(256);
    let strict = Encoder::default();
    c.bench_function("encode_strict_11k", |b| {
        b.iter(|| strict.encode(black_box(&text)));
    });

    let noisy = format!("{PANGRAM}1234, !?").repeat(256);
    let skip = Encoder::new(UnsupportedPolicy::Skip).unwrap_or_default();
    c.bench_function("encode_skip_noisy", |b| {
        b.iter(|| skip.encode(black_box(&noisy)));
    });
}

fn bench_lines(c: &mut Criterion) {
    let text = format!("{PANGRAM}\n").repeat(4096);
    let encoder = Encoder::default();
    c.bench_function("encode_lines_4096", |b| {
        b.iter(|| encode_lines(black_box(&text), &encoder));
    });
}

criterion_group!(benches, bench_encode, bench_lines);
criterion_main!(benches);
