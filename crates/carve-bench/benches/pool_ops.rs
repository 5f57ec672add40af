//! Criterion micro-benchmarks for the keyed pool.

use carve_pool::Pool;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_store(c: &mut Criterion) {
    c.bench_function("pool_store_4k", |b| {
        b.iter(|| {
            let mut pool: Pool<u32, u64> = Pool::with_capacity(4096);
            for key in 0..4096u32 {
                pool.store_at(key, u64::from(key) * 3);
            }
            pool
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let mut pool: Pool<u32, u64> = Pool::with_capacity(4096);
    for key in 0..4096u32 {
        pool.store_at(key, u64::from(key) * 3);
    }

    c.bench_function("pool_load_4k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for key in 0..4096u32 {
                sum = sum.wrapping_add(*pool.load_at(&key).unwrap());
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_store, bench_load);
criterion_main!(benches);
