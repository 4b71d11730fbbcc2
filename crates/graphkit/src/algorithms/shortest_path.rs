//! Shared single-source shortest path result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::{NodeId, WeightSum};

/// Distances and predecessor tree from one source.
///
/// `distances[v]` is `S::INFINITY` for nodes the search never reached, and
/// `predecessors[v]` is [`NodeId::INVALID`] for those nodes and for the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPaths<S> {
    /// Source node.
    pub source: NodeId,
    /// Tentative or final distance per node.
    pub distances: Vec<S>,
    /// Predecessor on the best known path per node.
    pub predecessors: Vec<NodeId>,
}

impl<S: WeightSum> ShortestPaths<S> {
    pub(crate) fn new(num_nodes: usize, source: NodeId) -> Self {
        let mut distances = vec![S::INFINITY; num_nodes];
        distances[source.index()] = S::ZERO;
        Self {
            source,
            distances,
            predecessors: vec![NodeId::INVALID; num_nodes],
        }
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `node`, or `None` if unreachable or out of range.
    pub fn distance(&self, node: NodeId) -> Option<S> {
        self.distances
            .get(node.index())
            .copied()
            .filter(|d| !d.is_infinite())
    }

    /// Check if `node` was reached from the source.
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Node sequence from the source to `target`, both inclusive.
    ///
    /// Returns `None` for unreachable targets. The walk is bounded by the node
    /// count, so a predecessor cycle left behind by a negative cycle also
    /// yields `None` instead of looping.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current.index()];
            if !current.is_valid() || path.len() > self.len() {
                return None;
            }
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marks_only_source() {
        let paths = ShortestPaths::<i64>::new(3, NodeId(1));
        assert_eq!(paths.distance(NodeId(1)), Some(0));
        assert_eq!(paths.distance(NodeId(0)), None);
        assert!(!paths.is_reachable(NodeId(2)));
        assert_eq!(paths.distance(NodeId(9)), None);
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_path_to() {
        let mut paths = ShortestPaths::<i64>::new(4, NodeId(0));
        paths.distances = vec![0, 5, 8, i64::MAX];
        paths.predecessors = vec![NodeId::INVALID, NodeId(0), NodeId(1), NodeId::INVALID];

        assert_eq!(paths.path_to(NodeId(2)), Some(vec![NodeId(0), NodeId(1), NodeId(2)]));
        assert_eq!(paths.path_to(NodeId(0)), Some(vec![NodeId(0)]));
        assert_eq!(paths.path_to(NodeId(3)), None);
    }

    #[test]
    fn test_path_to_predecessor_cycle_terminates() {
        let mut paths = ShortestPaths::<i64>::new(3, NodeId(0));
        paths.distances = vec![0, -4, -6];
        paths.predecessors = vec![NodeId::INVALID, NodeId(2), NodeId(1)];

        assert_eq!(paths.path_to(NodeId(2)), None);
    }
}
