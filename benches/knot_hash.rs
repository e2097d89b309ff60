// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use knot_grid::grid::build;
use knot_grid::knot::knot_hash;
use knot_grid::regions::count_regions;

const INPUTS: &[&str] = &["", "flqrgnkx-0", "a considerably longer key used to stress the length sequence"];

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("Knot hash");

    for &input in INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("hash", input.len()), &input, |bencher, &input| {
            bencher.iter(|| knot_hash(black_box(input)))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disk grid");

    group.bench_function("build", |bencher| bencher.iter(|| build(black_box("flqrgnkx"))));

    let grid = build("flqrgnkx").unwrap();
    group.bench_function("count_regions", |bencher| {
        bencher.iter(|| count_regions(black_box(&grid)))
    });

    group.finish();
}

criterion_group!(benches, bench_hash, bench_pipeline);
criterion_main!(benches);
