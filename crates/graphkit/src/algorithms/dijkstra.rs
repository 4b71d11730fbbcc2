//! Dijkstra's single-source shortest paths.
//!
//! Uses a binary heap with lazy deletion instead of decrease-key: an improved
//! tentative distance pushes a fresh entry, and entries for nodes that were
//! already finalized are skipped when popped. Total work O((V + E) log V).
//!
//! Weights must be non-negative. By default this is checked before the search
//! starts; with [`DijkstraConfig::skip_weight_validation`] the check is
//! skipped and a negative weight gives unspecified (but memory-safe, finite
//! time) distances.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::shortest_path::ShortestPaths;
use crate::models::{NodeId, Weight, WeightSum, WeightedGraph};
use crate::{check_node, GraphError, Result};

/// Dijkstra configuration.
#[derive(Debug, Clone)]
pub struct DijkstraConfig {
    /// Reject negative weights up front.
    pub validate_weights: bool,
    /// Stop once this node is finalized.
    pub target: Option<NodeId>,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            validate_weights: true,
            target: None,
        }
    }
}

impl DijkstraConfig {
    /// Create new Dijkstra configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search as soon as `target` is finalized. Distances of nodes
    /// not yet finalized at that point are upper bounds, not exact.
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Trust the caller that no weight is negative.
    pub fn skip_weight_validation(mut self) -> Self {
        self.validate_weights = false;
        self
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first,
/// lower node index first on ties.
struct Candidate<S> {
    distance: S,
    node: NodeId,
}

impl<S: WeightSum> PartialEq for Candidate<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: WeightSum> Eq for Candidate<S> {}

impl<S: WeightSum> PartialOrd for Candidate<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: WeightSum> Ord for Candidate<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Dijkstra from `source` with default configuration.
///
/// Undirected graphs are searched in both directions.
///
/// # Example
///
/// ```
/// use graphkit::{dijkstra, NodeId, WeightedGraph};
///
/// let graph = WeightedGraph::undirected(3, &[(0, 1, 5), (1, 2, 3)])?;
/// let paths = dijkstra(&graph, NodeId(0))?;
/// assert_eq!(paths.distances, vec![0i64, 5, 8]);
/// # Ok::<(), graphkit::GraphError>(())
/// ```
pub fn dijkstra<W: Weight>(
    graph: &WeightedGraph<W>,
    source: NodeId,
) -> Result<ShortestPaths<W::Sum>> {
    dijkstra_with_config(graph, source, &DijkstraConfig::default())
}

/// Dijkstra with configuration.
///
/// # Errors
///
/// - [`GraphError::InvalidNodeId`] if `source` or the configured target is out
///   of range.
/// - [`GraphError::NegativeWeight`] if validation is enabled and an edge has a
///   negative weight.
pub fn dijkstra_with_config<W: Weight>(
    graph: &WeightedGraph<W>,
    source: NodeId,
    config: &DijkstraConfig,
) -> Result<ShortestPaths<W::Sum>> {
    let n = graph.num_nodes();
    check_node(source, n)?;
    if let Some(target) = config.target {
        check_node(target, n)?;
    }
    if config.validate_weights {
        if let Some(edge) = graph.edges().iter().position(|e| e.weight.is_negative()) {
            return Err(GraphError::NegativeWeight { edge });
        }
    }

    let mut paths = ShortestPaths::new(n, source);
    let mut finalized = vec![false; n];
    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        distance: W::Sum::ZERO,
        node: source,
    });

    let mut settled = 0usize;
    while let Some(Candidate { distance, node }) = heap.pop() {
        if finalized[node.index()] {
            continue; // Stale entry
        }
        finalized[node.index()] = true;
        settled += 1;

        if config.target == Some(node) {
            break;
        }

        for (next, weight) in graph.neighbors(node) {
            let candidate = distance + weight.widen();
            if candidate < paths.distances[next.index()] {
                paths.distances[next.index()] = candidate;
                paths.predecessors[next.index()] = node;
                heap.push(Candidate {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    debug!(
        nodes = n,
        edges = graph.num_edges(),
        source = source.0,
        settled,
        "dijkstra finished"
    );

    Ok(paths)
}

/// Run Dijkstra from each of `sources` against the same graph.
///
/// Each run owns its own state; the graph is only read. With the `parallel`
/// feature the runs are spread across the rayon thread pool. Results are in
/// `sources` order either way.
pub fn dijkstra_many<W: Weight>(
    graph: &WeightedGraph<W>,
    sources: &[NodeId],
) -> Result<Vec<ShortestPaths<W::Sum>>> {
    #[cfg(feature = "parallel")]
    let sources = sources.par_iter();
    #[cfg(not(feature = "parallel"))]
    let sources = sources.iter();

    sources.map(|&source| dijkstra(graph, source)).collect()
}
