//! Benchmarks for the graph algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphkit::{
    bellman_ford, bfs, bridges_and_articulation_points, dijkstra, minimum_spanning_tree,
    scc_kosaraju, scc_tarjan, CsrMatrix, NodeId, WeightedGraph,
};

/// Deterministic pseudo-random edge list: a ring (so every graph is
/// connected) plus `extra` chords.
fn make_edges(n: u32, extra: usize) -> Vec<(u32, u32, i64)> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut edges: Vec<(u32, u32, i64)> = (0..n)
        .map(|i| (i, (i + 1) % n, 1 + (next() % 100) as i64))
        .collect();
    for _ in 0..extra {
        let u = (next() % u64::from(n)) as u32;
        let v = (next() % u64::from(n)) as u32;
        edges.push((u, v, 1 + (next() % 100) as i64));
    }
    edges
}

fn benchmark_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for size in [1_000u32, 10_000, 100_000] {
        let graph = WeightedGraph::undirected(size as usize, &make_edges(size, size as usize * 4))
            .expect("benchmark graph");

        group.bench_with_input(BenchmarkId::new("mst", size), &graph, |b, graph| {
            b.iter(|| minimum_spanning_tree(black_box(graph)))
        });
    }

    group.finish();
}

fn benchmark_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for size in [1_000u32, 10_000, 100_000] {
        let graph = WeightedGraph::directed(size as usize, &make_edges(size, size as usize * 4))
            .expect("benchmark graph");

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            b.iter(|| dijkstra(black_box(graph), NodeId(0)))
        });
    }

    // Bellman-Ford is O(VE); keep it to smaller graphs.
    for size in [100u32, 1_000] {
        let graph = WeightedGraph::directed(size as usize, &make_edges(size, size as usize * 4))
            .expect("benchmark graph");

        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, graph| {
            b.iter(|| bellman_ford(black_box(graph), NodeId(0)))
        });
    }

    group.finish();
}

fn benchmark_dfs_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs");

    for size in [1_000u32, 10_000, 100_000] {
        let pairs: Vec<(u32, u32)> = make_edges(size, size as usize * 2)
            .into_iter()
            .map(|(u, v, _)| (u, v))
            .collect();
        let directed = CsrMatrix::from_edges(size as usize, &pairs).expect("benchmark graph");
        let undirected =
            CsrMatrix::from_undirected_edges(size as usize, &pairs).expect("benchmark graph");

        group.bench_with_input(BenchmarkId::new("kosaraju", size), &directed, |b, adj| {
            b.iter(|| scc_kosaraju(black_box(adj)))
        });
        group.bench_with_input(BenchmarkId::new("tarjan_scc", size), &directed, |b, adj| {
            b.iter(|| scc_tarjan(black_box(adj)))
        });
        group.bench_with_input(BenchmarkId::new("bridges", size), &undirected, |b, adj| {
            b.iter(|| bridges_and_articulation_points(black_box(adj)))
        });
        group.bench_with_input(BenchmarkId::new("bfs", size), &undirected, |b, adj| {
            b.iter(|| bfs(black_box(adj), &[NodeId(0)]))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_spanning_tree,
    benchmark_shortest_paths,
    benchmark_dfs_algorithms
);
criterion_main!(benches);
