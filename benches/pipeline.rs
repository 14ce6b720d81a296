//! Benchmarks for the veil pixel pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use veil::{apply_filter, reveal, Deficiency, PixelData, Rgb};

/// Deterministic synthetic pixel buffer, n pixels.
fn test_pixels(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let v = (i % 256) as u8;
            Rgb::new(v, v.wrapping_mul(7), v.wrapping_add(31))
        })
        .collect()
}

// -- Filter benchmarks --

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let small = test_pixels(64 * 64);
    let large = test_pixels(512 * 512);

    group.bench_function("apply_filter_64x64_red", |b| {
        b.iter(|| apply_filter(black_box(&small), Deficiency::Red))
    });

    group.bench_function("apply_filter_512x512_red", |b| {
        b.iter(|| apply_filter(black_box(&large), Deficiency::Red))
    });

    group.bench_function("apply_filter_512x512_none", |b| {
        b.iter(|| apply_filter(black_box(&large), Deficiency::None))
    });

    group.finish();
}

// -- Reveal benchmarks --

fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    let rgb = PixelData::Rgb(test_pixels(512 * 512));
    let luma = PixelData::Luma((0..512 * 512).map(|i| (i % 256) as u8).collect());

    group.bench_function("reveal_512x512_rgb", |b| {
        b.iter(|| reveal(black_box(&rgb)))
    });

    group.bench_function("reveal_512x512_luma", |b| {
        b.iter(|| reveal(black_box(&luma)))
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_reveal);
criterion_main!(benches);
