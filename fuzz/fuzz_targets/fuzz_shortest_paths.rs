//! Fuzz target for the weighted algorithms.
//!
//! Compares Dijkstra against Bellman-Ford on non-negative weights and checks
//! Kruskal output invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use graphkit::{bellman_ford, dijkstra, minimum_spanning_tree, NodeId, WeightedGraph};

/// Fuzz input: weighted edges over a small node range.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    num_nodes: u8,
    source: u8,
    edges: Vec<(u8, u8, i32)>,
    directed: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit size; Bellman-Ford is O(VE)
    if input.num_nodes == 0 || input.edges.len() > 500 {
        return;
    }

    let n = input.num_nodes as usize;
    let edges: Vec<(u32, u32, i32)> = input
        .edges
        .iter()
        .filter(|&&(u, v, _)| (u as usize) < n && (v as usize) < n)
        .map(|&(u, v, w)| (u32::from(u), u32::from(v), w))
        .collect();
    let source = NodeId(u32::from(input.source) % n as u32);

    let build = |edges: &[(u32, u32, i32)]| {
        let graph = if input.directed {
            WeightedGraph::directed(n, edges)
        } else {
            WeightedGraph::undirected(n, edges)
        };
        graph.expect("endpoints filtered")
    };

    // Arbitrary weights: Bellman-Ford must terminate and stay consistent.
    let graph = build(&edges);
    let result = bellman_ford(&graph, source).expect("source in range");
    assert_eq!(result.has_negative_cycle(), result.distances().is_none());
    if let Some(cycle) = result.negative_cycle() {
        assert!(!cycle.is_empty() && cycle.len() <= n);
    }

    // Non-negative weights: both shortest path algorithms agree.
    let non_negative: Vec<(u32, u32, i32)> = edges
        .iter()
        .map(|&(u, v, w)| (u, v, w.saturating_abs()))
        .collect();
    let graph = build(&non_negative);
    let dj = dijkstra(&graph, source).expect("non-negative weights");
    let bf = bellman_ford(&graph, source).expect("source in range");
    assert_eq!(bf.distances(), Some(&dj.distances[..]));

    if !input.directed {
        let mst = minimum_spanning_tree(&graph).expect("undirected graph");
        assert!(mst.edges.len() < n);
        let total: i64 = mst.edges.iter().map(|e| i64::from(e.weight)).sum();
        assert_eq!(total, mst.total_weight);
    }
});
