//! Criterion benchmarks for warmdrive-core DSP primitives
//!
//! Run with: cargo bench -p warmdrive-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use warmdrive_core::{BoostCell, SineTable, power_compress, soft_clip};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_sine_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("SineTable");

    group.bench_function("build", |b| {
        b.iter(|| black_box(SineTable::new()));
    });

    let table = SineTable::new();
    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::new("lookup", block_size),
            &block_size,
            |b, _| {
                b.iter(|| {
                    for &sample in &input {
                        black_box(table.lookup(black_box(sample)));
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("libm_sinf", block_size),
            &block_size,
            |b, _| {
                b.iter(|| {
                    for &sample in &input {
                        black_box(libm::sinf(black_box(sample)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_boost_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("BoostCell");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::new("cascade", block_size),
            &block_size,
            |b, _| {
                let mut first = BoostCell::new();
                let mut second = BoostCell::new();
                b.iter(|| {
                    for &sample in &input {
                        black_box(second.process(first.process(black_box(sample), 0.5), 0.5));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_shapers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shapers");
    let input = generate_test_signal(512);

    group.bench_function("soft_clip", |b| {
        b.iter(|| {
            for &sample in &input {
                black_box(soft_clip(black_box(sample * 2.0)));
            }
        });
    });

    group.bench_function("power_compress", |b| {
        b.iter(|| {
            for &sample in &input {
                black_box(power_compress(black_box(sample), 0.6));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sine_table, bench_boost_cascade, bench_shapers);
criterion_main!(benches);
