//! Fuzz target for the unweighted graph algorithms.
//!
//! Builds adjacency from arbitrary edge lists (including out-of-range
//! endpoints) and checks that every algorithm either rejects the input or
//! returns a structurally consistent result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use graphkit::{
    bfs, bridges_and_articulation_points, count_connected_components, dfs_preorder, has_cycle,
    scc_kosaraju, scc_tarjan, CsrMatrix, NodeId,
};

/// Fuzz input: node count and raw edges.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    num_nodes: u8,
    edges: Vec<(u8, u8)>,
    directed: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit size
    if input.edges.len() > 2000 {
        return;
    }

    let n = input.num_nodes as usize;
    let edges: Vec<(u32, u32)> = input
        .edges
        .iter()
        .map(|&(u, v)| (u32::from(u), u32::from(v)))
        .collect();

    let built = if input.directed {
        CsrMatrix::from_edges(n, &edges)
    } else {
        CsrMatrix::from_undirected_edges(n, &edges)
    };

    let in_range = edges.iter().all(|&(u, v)| (u as usize) < n && (v as usize) < n);
    let adj = match built {
        Ok(adj) => {
            assert!(in_range, "builder accepted an out-of-range endpoint");
            adj
        }
        Err(_) => {
            assert!(!in_range, "builder rejected a valid edge list");
            return;
        }
    };
    assert!(adj.validate().is_ok());

    // SCC labels partition the nodes, and both algorithms agree.
    let kosaraju = scc_kosaraju(&adj).expect("scc on valid matrix");
    let tarjan = scc_tarjan(&adj).expect("scc on valid matrix");
    assert_eq!(kosaraju.len(), n);
    for u in 0..n {
        for v in 0..n {
            assert_eq!(kosaraju[u] == kosaraju[v], tarjan[u] == tarjan[v]);
        }
    }

    if !input.directed {
        let analysis = bridges_and_articulation_points(&adj).expect("undirected matrix");
        assert!(analysis
            .articulation_points
            .windows(2)
            .all(|w| w[0] < w[1]));

        // A forest is exactly a graph in which every edge is a bridge.
        let pairs: Vec<(NodeId, NodeId)> =
            edges.iter().map(|&(u, v)| (NodeId(u), NodeId(v))).collect();
        let cyclic = has_cycle(n, &pairs).expect("validated edges");
        assert_eq!(!cyclic, analysis.bridges.len() == edges.len());
        assert!(count_connected_components(n, &pairs).expect("validated edges") <= n);
    }

    if n > 0 {
        let distances = bfs(&adj, &[NodeId(0)]).expect("source in range");
        let order = dfs_preorder(&adj, NodeId(0)).expect("source in range");
        let reached = distances.iter().filter(|d| d.is_reachable()).count();
        assert_eq!(reached, order.len());
    }
});
