//! Minimum spanning tree / forest (Kruskal).
//!
//! Edges are scanned in ascending weight order and accepted whenever they join
//! two different components of a [`UnionFind`]. A disconnected graph yields a
//! minimum spanning forest with `is_spanning == false`; that is a result, not
//! an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::union_find::UnionFind;
use crate::models::{Edge, EdgeId, Weight, WeightSum, WeightedGraph};
use crate::{GraphError, Result};

/// Kruskal output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpanningForest<W: Weight> {
    /// Accepted edges, in acceptance order (non-decreasing weight).
    pub edges: Vec<Edge<W>>,
    /// IDs of the accepted edges in the input graph.
    pub edge_ids: Vec<EdgeId>,
    /// Sum of accepted weights, in the widened accumulator type.
    pub total_weight: W::Sum,
    /// Exactly `n - 1` edges were accepted, i.e. the graph is connected.
    pub is_spanning: bool,
}

impl<W: Weight> SpanningForest<W> {
    /// Number of trees in the forest for a graph with `num_nodes` nodes.
    pub fn num_trees(&self, num_nodes: usize) -> usize {
        num_nodes - self.edges.len()
    }
}

/// Kruskal's minimum spanning tree over an undirected graph.
///
/// Edges of equal weight are taken in input order, so the result is
/// deterministic. Stops as soon as `n - 1` edges have been accepted.
///
/// # Errors
///
/// [`GraphError::DirectionMismatch`] if the graph is directed.
pub fn minimum_spanning_tree<W: Weight>(graph: &WeightedGraph<W>) -> Result<SpanningForest<W>> {
    if graph.is_directed() {
        return Err(GraphError::DirectionMismatch {
            expected: "undirected",
        });
    }

    let n = graph.num_nodes();
    let edges = graph.edges();
    let target = n.saturating_sub(1);

    // Stable sort keeps input order among equal weights. NaN was rejected at
    // graph construction, so partial_cmp always succeeds.
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| {
        edges[a]
            .weight
            .partial_cmp(&edges[b].weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut uf = UnionFind::new(n);
    let mut forest = SpanningForest {
        edges: Vec::with_capacity(target),
        edge_ids: Vec::with_capacity(target),
        total_weight: W::Sum::ZERO,
        is_spanning: false,
    };

    for i in order {
        if forest.edges.len() == target {
            break;
        }
        let edge = edges[i];
        if uf.union(edge.source, edge.target) {
            forest.total_weight = forest.total_weight + edge.weight.widen();
            forest.edges.push(edge);
            forest.edge_ids.push(EdgeId::from(i));
        }
    }

    forest.is_spanning = forest.edges.len() == target;

    debug!(
        nodes = n,
        edges = edges.len(),
        accepted = forest.edges.len(),
        spanning = forest.is_spanning,
        "kruskal finished"
    );

    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    #[test]
    fn test_known_mst() {
        let graph =
            WeightedGraph::undirected(4, &[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap();
        let mst = minimum_spanning_tree(&graph).unwrap();

        assert_eq!(mst.total_weight, 4i64);
        assert!(mst.is_spanning);
        assert_eq!(
            mst.edges,
            vec![Edge::new(0u32, 1u32, 1), Edge::new(2u32, 3u32, 1), Edge::new(1u32, 2u32, 2)]
        );
        assert_eq!(mst.edge_ids, vec![EdgeId(0), EdgeId(3), EdgeId(1)]);
        assert_eq!(mst.num_trees(4), 1);
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let graph = WeightedGraph::undirected(5, &[(0, 1, 3), (2, 3, 1), (3, 4, 2)]).unwrap();
        let mst = minimum_spanning_tree(&graph).unwrap();

        assert!(!mst.is_spanning);
        assert_eq!(mst.edges.len(), 3);
        assert_eq!(mst.total_weight, 6i64);
        assert_eq!(mst.num_trees(5), 2);
    }

    #[test]
    fn test_single_and_empty_graphs_are_spanning() {
        let empty = WeightedGraph::<i32>::undirected(0, &[]).unwrap();
        let mst = minimum_spanning_tree(&empty).unwrap();
        assert!(mst.is_spanning);
        assert_eq!(mst.total_weight, 0);

        let single = WeightedGraph::undirected(1, &[(0, 0, 7)]).unwrap();
        let mst = minimum_spanning_tree(&single).unwrap();
        assert!(mst.is_spanning);
        assert!(mst.edges.is_empty());
    }

    #[test]
    fn test_stops_after_n_minus_one_edges() {
        let graph =
            WeightedGraph::undirected(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (0, 1, 0)]).unwrap();
        let mst = minimum_spanning_tree(&graph).unwrap();

        assert_eq!(mst.edge_ids, vec![EdgeId(3), EdgeId(1)]);
        assert_eq!(mst.total_weight, 1i64);
    }

    #[test]
    fn test_total_weight_is_widened() {
        let graph = WeightedGraph::undirected(
            3,
            &[(0, 1, i32::MAX), (1, 2, i32::MAX), (0, 2, i32::MAX)],
        )
        .unwrap();
        let mst = minimum_spanning_tree(&graph).unwrap();

        assert_eq!(mst.total_weight, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_negative_and_float_weights() {
        let graph =
            WeightedGraph::undirected(3, &[(0, 1, -1.5f64), (1, 2, 2.0), (0, 2, 0.25)]).unwrap();
        let mst = minimum_spanning_tree(&graph).unwrap();

        assert!((mst.total_weight - (-1.25)).abs() < 1e-12);
        assert_eq!(mst.edges[0].source, NodeId(0));
    }

    #[test]
    fn test_directed_graph_rejected() {
        let graph = WeightedGraph::directed(2, &[(0, 1, 1)]).unwrap();
        assert_eq!(
            minimum_spanning_tree(&graph),
            Err(GraphError::DirectionMismatch {
                expected: "undirected"
            })
        );
    }

    #[test]
    fn test_idempotent() {
        let graph =
            WeightedGraph::undirected(4, &[(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 0, 2)]).unwrap();
        let first = minimum_spanning_tree(&graph).unwrap();
        let second = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(first, second);
    }
}
