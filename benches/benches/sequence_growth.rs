// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_sequence::Sequence;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("sequence_n{}", n), |b| {
            b.iter(|| {
                let mut seq = Sequence::new();
                for i in 0..n {
                    seq.push(i as u64);
                }
                black_box(seq.reallocations());
            });
        });
        group.bench_function(format!("vec_n{}", n), |b| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(i as u64);
                }
                black_box(v.capacity());
            });
        });
    }
    group.finish();
}

fn bench_reset_refill(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset_refill");
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        // A warm buffer, refilled per iteration the way a frame loop does.
        group.bench_function(format!("reset_n{}", n), |b| {
            let mut seq: Sequence<u64> = (0..n as u64).collect();
            b.iter(|| {
                seq.reset();
                for i in 0..n {
                    seq.push(i as u64);
                }
                black_box(seq.len());
            });
        });
        // Releasing the buffer forces the doubling sequence again.
        group.bench_function(format!("clear_n{}", n), |b| {
            b.iter_batched(
                || (0..n as u64).collect::<Sequence<u64>>(),
                |mut seq| {
                    seq.clear();
                    for i in 0..n {
                        seq.push(i as u64);
                    }
                    black_box(seq.len());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_clamped_reads(c: &mut Criterion) {
    let seq: Sequence<u64> = (0..4096).collect();
    c.bench_function("at_clamped_4096", |b| {
        b.iter(|| {
            let mut sum = 0_u64;
            for i in (0..8192).step_by(7) {
                sum = sum.wrapping_add(*seq.at(black_box(i)).unwrap_or(&0));
            }
            black_box(sum);
        });
    });
}

criterion_group!(benches, bench_push, bench_reset_refill, bench_clamped_reads);
criterion_main!(benches);
