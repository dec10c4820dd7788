//! Analyze Benchmarks
//!
//! Run with: cargo bench --bench analyze

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zoo_enclosure_planner::Planner;

fn bench_analyze(c: &mut Criterion) {
    let planner = Planner::builtin().expect("built-in catalog is valid");

    c.bench_function("analyze_monkey_3", |b| {
        b.iter(|| planner.analyze(black_box("MONKEY"), black_box(3)))
    });

    c.bench_function("analyze_invalid_species", |b| {
        b.iter(|| planner.analyze(black_box("UNICORN"), black_box(1)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let planner = Planner::builtin().expect("built-in catalog is valid");
    let species = ["LION", "LEOPARD", "CROCODILE", "MONKEY", "GAZELLE", "HIPPO"];
    let queries: Vec<(String, i64)> = (0..1_000)
        .map(|i| (species[i % species.len()].to_string(), (i % 4 + 1) as i64))
        .collect();

    c.bench_function("analyze_batch_1000", |b| {
        b.iter(|| planner.analyze_batch(black_box(&queries)))
    });
}

criterion_group!(benches, bench_analyze, bench_batch);
criterion_main!(benches);
