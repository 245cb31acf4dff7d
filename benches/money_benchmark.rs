// ============================================================================
// Idle Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Symbol Ladder - Closed-form indexing of shallow and deep symbols
// 2. Decomposition - Greedy breakdown of magnitudes across the tier range
// 3. Arithmetic - Checked add/scale on decomposed quantities
// 4. Text Codec - Compact notation serialize/deserialize
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use idle_money::prelude::*;
use std::hint::black_box;

// ============================================================================
// Symbol Ladder Benchmarks
// ============================================================================

fn benchmark_symbol_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_index");

    for symbol in ["k", "aa", "zz", "zzzz", "zzzzzzzz"] {
        let parsed = TierSymbol::new(symbol).unwrap();
        group.bench_with_input(BenchmarkId::new("index", symbol), &parsed, |b, s| {
            b.iter(|| black_box(s.index()))
        });
    }

    group.finish();
}

fn benchmark_symbol_next(c: &mut Criterion) {
    c.bench_function("symbol_next_carry", |b| {
        let s = TierSymbol::new("azzz").unwrap();
        b.iter(|| black_box(s.next()))
    });
}

// ============================================================================
// Decomposition Benchmarks
// ============================================================================

fn benchmark_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("decomposition");

    // Magnitudes spanning few to many populated tiers
    for exponent in [3, 15, 60, 150, 300] {
        let amount = 1.2345_f64 * 10f64.powi(exponent);
        group.bench_with_input(BenchmarkId::new("from_magnitude", exponent), &amount, |b, x| {
            b.iter(|| black_box(Quantity::from_magnitude(*x).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let a = Quantity::from_magnitude(123_456_789_012.0).unwrap();
    let b = Quantity::from_magnitude(987_654_321.0).unwrap();

    c.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(a.checked_add(&b).unwrap()))
    });

    c.bench_function("checked_scale", |bench| {
        bench.iter(|| black_box(a.checked_scale(1.15).unwrap()))
    });
}

// ============================================================================
// Text Codec Benchmarks
// ============================================================================

fn benchmark_codec(c: &mut Criterion) {
    let codec = TextCodec::default();
    let q = Quantity::from_magnitude(7.5e17).unwrap();

    c.bench_function("serialize", |b| b.iter(|| black_box(codec.serialize(&q))));

    c.bench_function("deserialize", |b| {
        b.iter(|| black_box(codec.deserialize("750aa").unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_symbol_index,
    benchmark_symbol_next,
    benchmark_decomposition,
    benchmark_arithmetic,
    benchmark_codec,
);
criterion_main!(benches);
