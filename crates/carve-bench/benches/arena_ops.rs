//! Criterion micro-benchmarks for arena placement, reset, and export.

use carve_bench::{record_arena, reference_arena, REFERENCE_COUNT};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_place(c: &mut Criterion) {
    c.bench_function("place_u64_10k", |b| {
        b.iter(|| {
            let mut arena = reference_arena();
            for i in 0..REFERENCE_COUNT as u64 {
                let slot = arena.place_with(|v: &mut u64| *v = i).unwrap();
                black_box(slot);
            }
            arena
        })
    });

    c.bench_function("place_record_10k", |b| {
        b.iter(|| {
            let mut arena = record_arena();
            for i in 0..REFERENCE_COUNT {
                let slot = arena
                    .place_with(|v: &mut [usize; 3]| v[0] = i)
                    .unwrap();
                black_box(slot);
            }
            arena
        })
    });
}

fn bench_reset_refill(c: &mut Criterion) {
    let mut arena = reference_arena();
    c.bench_function("reset_refill_u64_10k", |b| {
        b.iter(|| {
            arena.reset();
            for i in 0..REFERENCE_COUNT as u64 {
                let _ = arena.place_with(|v: &mut u64| *v = i).unwrap();
            }
            black_box(arena.used())
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let mut arena = reference_arena();
    for i in 0..REFERENCE_COUNT as u64 {
        let _ = arena.place_with(|v: &mut u64| *v = i).unwrap();
    }
    let mut sink = Vec::with_capacity(arena.used());

    c.bench_function("export_bytes_80kb", |b| {
        b.iter(|| {
            sink.clear();
            let written = arena.export_bytes(&mut sink).unwrap();
            black_box(written)
        })
    });
}

criterion_group!(benches, bench_place, bench_reset_refill, bench_export);
criterion_main!(benches);
