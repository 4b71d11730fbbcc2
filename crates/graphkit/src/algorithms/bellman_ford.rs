//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights and detects negative cycles reachable from
//! the source. Relaxes every arc up to `n - 1` times, then makes one more
//! pass: any arc that still improves a reached node proves a negative cycle.
//!
//! Time: O(V * E).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::shortest_path::ShortestPaths;
use crate::models::{NodeId, Weight, WeightSum, WeightedGraph};
use crate::{check_node, Result};

/// Bellman-Ford configuration.
#[derive(Debug, Clone)]
pub struct BellmanFordConfig {
    /// Stop relaxing after the first pass that changes nothing.
    pub early_termination: bool,
}

impl Default for BellmanFordConfig {
    fn default() -> Self {
        Self {
            early_termination: true,
        }
    }
}

impl BellmanFordConfig {
    /// Create new Bellman-Ford configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always run the full `n - 1` passes.
    pub fn without_early_termination(mut self) -> Self {
        self.early_termination = false;
        self
    }
}

/// Bellman-Ford output.
///
/// When a negative cycle is reachable, shortest distances are undefined for
/// every node the cycle reaches. [`distances`](Self::distances) then returns
/// `None`; the values left by the last pass stay available through
/// [`raw_distances`](Self::raw_distances) for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BellmanFordResult<S> {
    paths: ShortestPaths<S>,
    negative_cycle: Option<Vec<NodeId>>,
    passes: usize,
}

impl<S: WeightSum> BellmanFordResult<S> {
    /// Whether a negative cycle is reachable from the source.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Shortest distances, or `None` if a negative cycle makes them undefined.
    pub fn distances(&self) -> Option<&[S]> {
        match self.negative_cycle {
            None => Some(&self.paths.distances),
            Some(_) => None,
        }
    }

    /// Shortest path tree, or `None` if a negative cycle makes it undefined.
    pub fn paths(&self) -> Option<&ShortestPaths<S>> {
        (!self.has_negative_cycle()).then_some(&self.paths)
    }

    /// Distances left by the last relaxation pass, valid or not.
    pub fn raw_distances(&self) -> &[S] {
        &self.paths.distances
    }

    /// Predecessor per node (`NodeId::INVALID` for the source and for
    /// unreached nodes). Follows the negative cycle when one exists.
    pub fn predecessors(&self) -> &[NodeId] {
        &self.paths.predecessors
    }

    /// One negative cycle reachable from the source, in traversal order.
    pub fn negative_cycle(&self) -> Option<&[NodeId]> {
        self.negative_cycle.as_deref()
    }

    /// Number of relaxation passes performed, excluding the detection pass.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

/// Bellman-Ford from `source` with default configuration.
///
/// Undirected edges are relaxed in both directions, so an undirected edge
/// with negative weight is itself a negative cycle.
///
/// # Example
///
/// ```
/// use graphkit::{bellman_ford, NodeId, WeightedGraph};
///
/// let graph = WeightedGraph::directed(2, &[(0, 1, 1), (1, 0, -2)])?;
/// let result = bellman_ford(&graph, NodeId(0))?;
/// assert!(result.has_negative_cycle());
/// assert!(result.distances().is_none());
/// # Ok::<(), graphkit::GraphError>(())
/// ```
pub fn bellman_ford<W: Weight>(
    graph: &WeightedGraph<W>,
    source: NodeId,
) -> Result<BellmanFordResult<W::Sum>> {
    bellman_ford_with_config(graph, source, &BellmanFordConfig::default())
}

/// Bellman-Ford with configuration.
///
/// # Errors
///
/// [`GraphError::InvalidNodeId`](crate::GraphError::InvalidNodeId) if
/// `source` is out of range.
pub fn bellman_ford_with_config<W: Weight>(
    graph: &WeightedGraph<W>,
    source: NodeId,
    config: &BellmanFordConfig,
) -> Result<BellmanFordResult<W::Sum>> {
    let n = graph.num_nodes();
    check_node(source, n)?;

    let mut paths = ShortestPaths::new(n, source);
    let mut passes = 0usize;

    // Relax edges V-1 times
    for _ in 0..n.saturating_sub(1) {
        passes += 1;
        let updated = relax_all(graph, &mut paths);
        trace!(pass = passes, updated, "bellman-ford pass");

        // Early termination if no updates
        if config.early_termination && updated == 0 {
            break;
        }
    }

    // Detection pass: record the first arc that still relaxes.
    let witness = graph.arcs().find_map(|(u, v, w)| {
        let du = paths.distances[u.index()];
        (!du.is_infinite() && du + w.widen() < paths.distances[v.index()]).then_some((u, v))
    });

    let negative_cycle = witness.map(|(u, v)| {
        paths.predecessors[v.index()] = u;
        extract_cycle(&paths.predecessors, v)
    });

    match &negative_cycle {
        Some(cycle) => warn!(
            source = source.0,
            cycle_len = cycle.len(),
            "negative cycle reachable from source"
        ),
        None => debug!(
            nodes = n,
            edges = graph.num_edges(),
            source = source.0,
            passes,
            "bellman-ford finished"
        ),
    }

    Ok(BellmanFordResult {
        paths,
        negative_cycle,
        passes,
    })
}

/// One pass over every arc. Returns the number of improved distances.
fn relax_all<W: Weight>(graph: &WeightedGraph<W>, paths: &mut ShortestPaths<W::Sum>) -> usize {
    let mut updated = 0;
    for (u, v, w) in graph.arcs() {
        let du = paths.distances[u.index()];
        if du.is_infinite() {
            continue; // Skip unreachable tails
        }
        let candidate = du + w.widen();
        if candidate < paths.distances[v.index()] {
            paths.distances[v.index()] = candidate;
            paths.predecessors[v.index()] = u;
            updated += 1;
        }
    }
    updated
}

/// Walk predecessors from a node that relaxed in the detection pass.
///
/// After `n` steps the walk is guaranteed to sit on the cycle; from there,
/// follow predecessors until the start repeats.
fn extract_cycle(predecessors: &[NodeId], from: NodeId) -> Vec<NodeId> {
    let mut on_cycle = from;
    for _ in 0..predecessors.len() {
        on_cycle = predecessors[on_cycle.index()];
    }

    let mut cycle = vec![on_cycle];
    let mut current = predecessors[on_cycle.index()];
    while current != on_cycle {
        cycle.push(current);
        current = predecessors[current.index()];
    }

    // Predecessor walk runs against the arcs.
    cycle.reverse();
    cycle
}
