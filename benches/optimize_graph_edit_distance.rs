//! Criterion benchmark exercising `optimize_graph_edit_distance` over a
//! small parametric family of cycle-versus-wheel graph pairs.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_edit_distance::api::optimize_graph_edit_distance;
use graph_edit_distance::naive_structs::NaiveGraph;
use graph_edit_distance::traits::DefaultEditCosts;

fn bench_cycle_vs_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_graph_edit_distance_cycle_vs_wheel");

    for &rim in &[4usize, 6, 8] {
        let g1: NaiveGraph<()> = NaiveGraph::cycle(rim);
        let g2: NaiveGraph<()> = NaiveGraph::wheel(rim + 1);

        group.bench_with_input(BenchmarkId::new("rim", rim), &(g1, g2), |b, (g1, g2)| {
            b.iter(|| {
                black_box(
                    optimize_graph_edit_distance(black_box(g1), black_box(g2), &DefaultEditCosts, None)
                        .unwrap()
                        .last(),
                )
            });
        });
    }

    group.finish();
}

fn bench_identical_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_graph_edit_distance_identical_paths");

    for &len in &[3usize, 5, 8] {
        let g: NaiveGraph<()> = NaiveGraph::path(len);

        group.bench_with_input(BenchmarkId::new("len", len), &g, |b, g| {
            b.iter(|| {
                black_box(
                    optimize_graph_edit_distance(black_box(g), black_box(g), &DefaultEditCosts, None)
                        .unwrap()
                        .last(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cycle_vs_wheel, bench_identical_paths);
criterion_main!(benches);
