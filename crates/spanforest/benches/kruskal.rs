//! Spanning forest benchmarks
//!
//! Measures the three stages that dominate a Kruskal run:
//! - union-find operations over long merge sequences
//! - candidate sort + scan on sparse and dense graphs
//! - BFS path extraction over the resulting tree

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use spanforest::{
    get_path, kruskal, minimum_spanning_tree, CsrGraph, DisjointSet, MstConfig, NodeId,
    WeightedMatrixGraph,
};

/// Random connected graph: a random spanning path plus `extra` random edges.
fn random_edges(n: u32, extra: usize, seed: u64) -> Vec<(u32, u32, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<_> = (1..n)
        .map(|v| (rng.gen_range(0..v), v, rng.gen_range(0.0..100.0)))
        .collect();
    for _ in 0..extra {
        edges.push((rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0.0..100.0)));
    }
    edges
}

/// Benchmark union-find merge sequences
fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_set");

    for n in [1_000u32, 100_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let pairs: Vec<_> = (0..n)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("union_random", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut sets = DisjointSet::new(n as usize).unwrap();
                for &(x, y) in pairs {
                    sets.union(NodeId(x), NodeId(y)).unwrap();
                }
                black_box(sets.set_count());
            });
        });

        group.bench_function(BenchmarkId::new("chain_then_find", n), |b| {
            b.iter(|| {
                let mut sets = DisjointSet::new(n as usize).unwrap();
                for i in 0..n - 1 {
                    sets.union(NodeId(i), NodeId(i + 1)).unwrap();
                }
                black_box(sets.find(NodeId(n - 1)).unwrap());
            });
        });
    }

    group.finish();
}

/// Benchmark Kruskal on sparse (CSR) and dense (matrix) storage
fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for n in [1_000u32, 10_000] {
        let edges = random_edges(n, n as usize * 4, 42);
        let csr = CsrGraph::from_weighted_edges(n as usize, &edges).unwrap();

        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("csr", n), &csr, |b, g| {
            b.iter(|| black_box(kruskal(g, &MstConfig::default()).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("csr_dedup", n), &csr, |b, g| {
            b.iter(|| black_box(kruskal(g, &MstConfig::new().with_dedup()).unwrap()));
        });
    }

    let n = 300u32;
    let edges = random_edges(n, (n * n) as usize / 4, 3);
    let matrix = WeightedMatrixGraph::from_weighted_edges(n as usize, &edges).unwrap();
    group.bench_with_input(BenchmarkId::new("matrix", n), &matrix, |b, g| {
        b.iter(|| black_box(kruskal(g, &MstConfig::default()).unwrap()));
    });

    group.finish();
}

/// Benchmark path extraction across a spanning tree
fn bench_get_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_path");

    for n in [1_000u32, 100_000] {
        let edges = random_edges(n, n as usize, 11);
        let csr = CsrGraph::from_weighted_edges(n as usize, &edges).unwrap();
        let tree = minimum_spanning_tree(&csr).unwrap();

        group.bench_with_input(BenchmarkId::new("tree", n), &tree, |b, t| {
            b.iter(|| black_box(get_path(t, NodeId(n - 1), NodeId(0)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_disjoint_set, bench_kruskal, bench_get_path);
criterion_main!(benches);
