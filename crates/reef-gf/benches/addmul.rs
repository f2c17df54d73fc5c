//! Benchmarks for the bulk GF(2^8) row operation.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use reef_gf::addmul;

fn bench_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state: u32 = 0xDEAD_BEEF;
    for _ in 0..size {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((state >> 16) as u8);
    }
    data
}

fn bench_addmul(c: &mut Criterion) {
    let sizes: &[usize] = &[4 * 1024, 64 * 1024, 1024 * 1024];

    let mut group = c.benchmark_group("addmul");
    for &size in sizes {
        let src = bench_data(size);
        let mut dst = bench_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("mul", size), &src, |b, src| {
            b.iter(|| addmul(&mut dst, src, 0x35));
        });
        // c = 1 degenerates to XOR, the systematic fast path.
        group.bench_with_input(BenchmarkId::new("xor", size), &src, |b, src| {
            b.iter(|| addmul(&mut dst, src, 1));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_addmul);
criterion_main!(benches);
