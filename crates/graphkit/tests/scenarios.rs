//! End-to-end scenarios across the public API.

use graphkit::{
    bellman_ford, bfs_levels, bridges_and_articulation_points, condensation, connected_components,
    count_connected_components, dijkstra, dijkstra_with_config, dfs_preorder, has_cycle,
    minimum_spanning_tree, scc_kosaraju, strongly_connected_components, ComponentId, CsrMatrix,
    DijkstraConfig, Edge, EdgeId, GraphError, NodeId, WeightedGraph,
};

fn node_pairs(pairs: &[(u32, u32)]) -> Vec<(NodeId, NodeId)> {
    pairs.iter().map(|&(u, v)| (NodeId(u), NodeId(v))).collect()
}

/// Cycle detection and component counting agree on a forest and on a graph
/// with one extra edge.
#[test]
fn test_union_find_helpers() {
    let forest = node_pairs(&[(0, 1), (1, 2), (3, 4)]);
    assert!(!has_cycle(6, &forest).unwrap());
    assert_eq!(count_connected_components(6, &forest).unwrap(), 3);

    let mut cyclic = forest.clone();
    cyclic.push((NodeId(2), NodeId(0)));
    assert!(has_cycle(6, &cyclic).unwrap());
    assert_eq!(count_connected_components(6, &cyclic).unwrap(), 3);

    let labels = connected_components(6, &cyclic).unwrap();
    assert_eq!(
        labels,
        vec![
            ComponentId(0),
            ComponentId(0),
            ComponentId(0),
            ComponentId(1),
            ComponentId(1),
            ComponentId(2)
        ]
    );
}

/// Kruskal over the four-node reference graph.
#[test]
fn test_mst_reference_graph() {
    let graph =
        WeightedGraph::undirected(4, &[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap();
    let mst = minimum_spanning_tree(&graph).unwrap();

    assert_eq!(mst.total_weight, 4i64);
    assert!(mst.is_spanning);
    assert_eq!(
        mst.edges,
        vec![
            Edge::new(0u32, 1u32, 1),
            Edge::new(2u32, 3u32, 1),
            Edge::new(1u32, 2u32, 2)
        ]
    );
}

/// Same graph answered by union-find, MST, Dijkstra and Bellman-Ford.
#[test]
fn test_algorithms_agree_on_shared_graph() {
    let edges = [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (4, 5, 9),
    ];
    let graph = WeightedGraph::undirected(6, &edges).unwrap();

    let dj = dijkstra(&graph, NodeId(0)).unwrap();
    assert_eq!(dj.distances, vec![0i64, 7, 9, 20, 20, 11]);
    assert_eq!(
        dj.path_to(NodeId(4)),
        Some(vec![NodeId(0), NodeId(2), NodeId(5), NodeId(4)])
    );

    let bf = bellman_ford(&graph, NodeId(0)).unwrap();
    assert_eq!(bf.distances(), Some(&dj.distances[..]));

    let mst = minimum_spanning_tree(&graph).unwrap();
    assert!(mst.is_spanning);
    assert_eq!(mst.total_weight, 2i64 + 6 + 7 + 9 + 9);
}

/// A negative cycle is reported as data; distances are withheld.
#[test]
fn test_negative_cycle_is_data() {
    let graph = WeightedGraph::directed(3, &[(0, 1, 1), (1, 0, -2), (1, 2, 5)]).unwrap();
    let result = bellman_ford(&graph, NodeId(0)).unwrap();

    assert!(result.has_negative_cycle());
    assert!(result.distances().is_none());
    assert_eq!(result.raw_distances().len(), 3);

    // Dijkstra refuses the same graph instead of producing wrong answers.
    assert_eq!(
        dijkstra(&graph, NodeId(0)),
        Err(GraphError::NegativeWeight { edge: 1 })
    );
}

/// Dijkstra with a target stops early but still reports the target exactly.
#[test]
fn test_dijkstra_target() {
    let graph = WeightedGraph::directed(4, &[(0, 1, 2), (1, 2, 2), (0, 2, 5), (2, 3, 1)]).unwrap();
    let config = DijkstraConfig::new().with_target(NodeId(2));
    let paths = dijkstra_with_config(&graph, NodeId(0), &config).unwrap();

    assert_eq!(paths.distance(NodeId(2)), Some(4i64));
    assert_eq!(paths.distance(NodeId(3)), None);
}

/// Cycle plus isolated node yields two components, in topological order.
#[test]
fn test_scc_and_condensation() {
    let adj = CsrMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
    let groups = strongly_connected_components(&adj).unwrap();

    assert_eq!(
        groups,
        vec![vec![NodeId(0), NodeId(1), NodeId(2)], vec![NodeId(3)]]
    );

    let labels = scc_kosaraju(&adj).unwrap();
    let dag = condensation(&adj, &labels).unwrap();
    assert_eq!(dag.num_nodes(), 2);
    assert!(dag.has_edge(NodeId(0), NodeId(1)));
    assert!(!dag.has_edge(NodeId(1), NodeId(0)));
}

/// Weighted graphs hand their adjacency to the unweighted algorithms.
#[test]
fn test_bridges_from_weighted_graph() {
    let graph = WeightedGraph::undirected(
        5,
        &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0), (0, 3, 1.0), (3, 4, 1.0)],
    )
    .unwrap();
    let analysis = bridges_and_articulation_points(graph.adjacency()).unwrap();

    assert_eq!(analysis.articulation_points, vec![NodeId(0), NodeId(3)]);
    let mut bridge_edges: Vec<EdgeId> = analysis.bridges.iter().map(|b| b.edge).collect();
    bridge_edges.sort();
    assert_eq!(bridge_edges, vec![EdgeId(3), EdgeId(4)]);
}

/// Traversals over a small undirected graph.
#[test]
fn test_traversals() {
    let adj = CsrMatrix::from_undirected_edges(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]).unwrap();

    let levels = bfs_levels(&adj, NodeId(0)).unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[2], vec![NodeId(3), NodeId(4)]);

    let order = dfs_preorder(&adj, NodeId(0)).unwrap();
    assert_eq!(
        order,
        vec![NodeId(0), NodeId(1), NodeId(3), NodeId(2), NodeId(4)]
    );
}

/// Invalid input fails before any work is done.
#[test]
fn test_invalid_input_errors() {
    assert_eq!(
        WeightedGraph::directed(2, &[(0, 2, 1)]).unwrap_err(),
        GraphError::InvalidNodeId {
            node: 2,
            num_nodes: 2
        }
    );
    assert_eq!(
        WeightedGraph::undirected(2, &[(0, 1, 1.0), (1, 0, f64::NAN)]).unwrap_err(),
        GraphError::InvalidWeight { edge: 1 }
    );

    let directed = CsrMatrix::from_edges(2, &[(0, 1)]).unwrap();
    assert!(matches!(
        bridges_and_articulation_points(&directed),
        Err(GraphError::DirectionMismatch { .. })
    ));
}

/// Results serialize for downstream tooling.
#[cfg(feature = "serde")]
#[test]
fn test_results_serialize() {
    let graph = WeightedGraph::undirected(3, &[(0, 1, 2), (1, 2, 3)]).unwrap();
    let mst = minimum_spanning_tree(&graph).unwrap();

    let json = serde_json::to_value(&mst).unwrap();
    assert_eq!(json["total_weight"], 5);
    assert_eq!(json["is_spanning"], true);
    assert_eq!(json["edges"][0]["source"], 0);
}
