//! Classical graph algorithms over compact, immutable adjacency structures.
//!
//! This crate provides:
//!
//! - **CSR Matrix**: Compressed Sparse Row adjacency with per-arc edge identity
//! - **Weighted Graph**: Edge list plus CSR view, generic over the weight type
//! - **Union-Find**: Disjoint sets with path compression and union by size
//! - **MST**: Kruskal's minimum spanning tree / forest
//! - **Shortest paths**: Dijkstra (non-negative weights) and Bellman-Ford
//!   (negative weights, negative-cycle detection)
//! - **SCC**: Kosaraju's two-pass decomposition (plus Tarjan as a cross-check)
//! - **Bridges**: Tarjan low-link bridges and articulation points
//! - **Traversal**: BFS distances, BFS levels, iterative DFS
//!
//! Every algorithm allocates its own working state, so independent calls can
//! run concurrently against the same graph. Depth-first searches use explicit
//! frame stacks and never recurse.
//!
//! # Example
//!
//! ```
//! use graphkit::{dijkstra, minimum_spanning_tree, NodeId, WeightedGraph};
//!
//! let graph = WeightedGraph::undirected(4, &[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)])?;
//!
//! let mst = minimum_spanning_tree(&graph)?;
//! assert_eq!(mst.total_weight, 4i64);
//! assert!(mst.is_spanning);
//!
//! let paths = dijkstra(&graph, NodeId(0))?;
//! assert_eq!(paths.distance(NodeId(3)), Some(4i64));
//! # Ok::<(), graphkit::GraphError>(())
//! ```

pub mod algorithms;
pub mod models;

// Re-export main types
pub use algorithms::bellman_ford::{
    bellman_ford, bellman_ford_with_config, BellmanFordConfig, BellmanFordResult,
};
pub use algorithms::bridges::{bridges_and_articulation_points, Bridge, BridgeAnalysis};
pub use algorithms::dijkstra::{dijkstra, dijkstra_many, dijkstra_with_config, DijkstraConfig};
pub use algorithms::mst::{minimum_spanning_tree, SpanningForest};
pub use algorithms::scc::{
    condensation, count_components, get_component_members, scc_kosaraju, scc_tarjan,
    scc_tarjan_with_config, strongly_connected_components, SccConfig,
};
pub use algorithms::shortest_path::ShortestPaths;
pub use algorithms::traversal::{
    bfs, bfs_levels, bfs_with_config, bfs_with_parents, dfs_preorder, reconstruct_path, BfsConfig,
};
pub use algorithms::union_find::{
    connected_components, count_connected_components, has_cycle, UnionFind,
};
pub use models::csr::{CsrMatrix, CsrMatrixBuilder};
pub use models::node::{ComponentId, Distance, EdgeId, NodeId};
pub use models::weight::{Weight, WeightSum};
pub use models::weighted::{Edge, WeightedGraph};

/// Graph algorithm error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Node index outside `[0, num_nodes)`.
    #[error("Invalid node ID {node}: graph has {num_nodes} nodes")]
    InvalidNodeId { node: u64, num_nodes: usize },

    /// Edge weight that cannot be ordered (NaN).
    #[error("Edge {edge} has an unordered weight (NaN)")]
    InvalidWeight { edge: usize },

    /// Negative edge weight handed to an algorithm that requires non-negative weights.
    #[error("Edge {edge} has a negative weight")]
    NegativeWeight { edge: usize },

    /// Algorithm requires a directed or undirected graph and got the other kind.
    #[error("Algorithm requires a {expected} graph")]
    DirectionMismatch { expected: &'static str },

    /// Empty graph.
    #[error("Empty graph")]
    EmptyGraph,

    /// Invalid CSR format.
    #[error("Invalid CSR format: {0}")]
    InvalidCsr(String),
}

impl GraphError {
    pub(crate) fn invalid_node(node: u64, num_nodes: usize) -> Self {
        GraphError::InvalidNodeId { node, num_nodes }
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Fails with [`GraphError::InvalidNodeId`] unless `node < num_nodes`.
pub(crate) fn check_node(node: NodeId, num_nodes: usize) -> Result<()> {
    if node.index() < num_nodes {
        Ok(())
    } else {
        Err(GraphError::invalid_node(u64::from(node.0), num_nodes))
    }
}
