use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quadft::bit_reversal::{bit_rev_plain, BitReversalTable};

pub fn bit_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_reversal");

    for n in 1..21 {
        let big_n: usize = 1 << n;
        let mut v: Vec<u64> = (0..big_n as u64).collect();
        let table = BitReversalTable::new(big_n);

        group.bench_with_input(BenchmarkId::new("table", n), &n, |b, _| {
            b.iter(|| table.permute(black_box(&mut v)))
        });

        group.bench_with_input(BenchmarkId::new("plain", n), &n, |b, _| {
            b.iter(|| bit_rev_plain(black_box(&mut v)))
        });

        let input: Vec<u64> = (0..big_n as u64).collect();
        let mut output = vec![0u64; big_n];
        group.bench_with_input(BenchmarkId::new("table out-of-place", n), &n, |b, _| {
            b.iter(|| table.permute_into(black_box(&input), black_box(&mut output)))
        });
    }

    group.finish();
}

criterion_group!(benches, bit_reversal);
criterion_main!(benches);
