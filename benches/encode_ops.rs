//! Benchmarks for texture-encoder hot paths.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use texture_encoder::{
    DataEncoder, EncoderKind, RgbaFloatEncoder, TextureEncoder, TextureLayout, TypedBuffer,
    Uint8Encoder,
};

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];

#[allow(clippy::cast_precision_loss)]
fn ramp(len: usize) -> Vec<f32> {
    (0..len).map(|i| i as f32).collect()
}

/// Benchmark encode across formats (runs before every upload).
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &len in &SIZES {
        // Passthrough: source already fills the texture
        let red = TextureEncoder::new(EncoderKind::Float32, 1).unwrap();
        group.bench_with_input(BenchmarkId::new("float32_passthrough", len), &len, |b, &len| {
            b.iter_batched(
                || TypedBuffer::F32(ramp(len)),
                |src| black_box(red.encode(src, len).unwrap()),
                BatchSize::LargeInput,
            );
        });

        // Grow: half-sized source padded with zeros
        group.bench_with_input(BenchmarkId::new("float32_grow", len), &len, |b, &len| {
            b.iter_batched(
                || TypedBuffer::F32(ramp(len / 2)),
                |src| black_box(red.encode(src, len).unwrap()),
                BatchSize::LargeInput,
            );
        });

        // Explode into RGBA texels
        let legacy = RgbaFloatEncoder::new(1).unwrap();
        group.bench_with_input(BenchmarkId::new("rgba_explode", len), &len, |b, &len| {
            b.iter_batched(
                || TypedBuffer::F32(ramp(len)),
                |src| black_box(legacy.encode(src, len).unwrap()),
                BatchSize::LargeInput,
            );
        });

        // Word to byte reinterpretation
        let bytes = Uint8Encoder::new(4).unwrap();
        group.bench_with_input(BenchmarkId::new("uint8_words", len), &len, |b, &len| {
            b.iter_batched(
                || TypedBuffer::F32(ramp(len)),
                |src| black_box(bytes.encode(src, len).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark decode across formats (runs after every readback).
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &len in &SIZES {
        let legacy = RgbaFloatEncoder::new(1).unwrap();
        let texels = legacy.encode(TypedBuffer::F32(ramp(len)), len).unwrap();
        group.bench_with_input(BenchmarkId::new("rgba_red_channel", len), &len, |b, &len| {
            b.iter_batched(
                || texels.clone(),
                |buf| black_box(legacy.decode(buf, len).unwrap()),
                BatchSize::LargeInput,
            );
        });

        let bytes = Uint8Encoder::new(4).unwrap();
        let raw = TypedBuffer::U8(vec![0xAB; len * 4]);
        group.bench_with_input(BenchmarkId::new("uint8_words", len), &len, |b, &len| {
            b.iter_batched(
                || raw.clone(),
                |buf| black_box(bytes.decode(buf, len).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark layout computation (should be very fast).
fn bench_layout(c: &mut Criterion) {
    c.bench_function("layout/for_texels", |b| {
        b.iter(|| black_box(TextureLayout::for_texels(black_box(1_000_003), 4096)));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_layout);
criterion_main!(benches);
