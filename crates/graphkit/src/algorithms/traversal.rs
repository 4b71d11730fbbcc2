//! Breadth-first and depth-first traversals.
//!
//! BFS computes hop distances from one or more sources to all reachable
//! nodes; the level view groups nodes by that distance. DFS yields the
//! preorder a recursive search would produce, without recursing.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::{CsrMatrix, Distance, NodeId};
use crate::{check_node, GraphError, Result};

/// BFS configuration.
#[derive(Debug, Clone)]
pub struct BfsConfig {
    /// Maximum distance to explore.
    pub max_distance: u32,
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            max_distance: u32::MAX - 1,
        }
    }
}

impl BfsConfig {
    /// Create new BFS configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum distance.
    pub fn with_max_distance(mut self, max: u32) -> Self {
        self.max_distance = max;
        self
    }
}

fn check_sources(adj: &CsrMatrix, sources: &[NodeId]) -> Result<()> {
    if adj.num_nodes() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    adj.validate()?;
    for &src in sources {
        check_node(src, adj.num_nodes())?;
    }
    Ok(())
}

/// Multi-source BFS.
///
/// Uses a queue-based approach with O(V + E) complexity.
///
/// # Arguments
///
/// * `adj` - Adjacency matrix in CSR format
/// * `sources` - Source nodes to start BFS from
///
/// # Returns
///
/// Vector of distances, one per node. Distance::INFINITY for unreachable nodes.
pub fn bfs(adj: &CsrMatrix, sources: &[NodeId]) -> Result<Vec<Distance>> {
    bfs_with_config(adj, sources, &BfsConfig::default())
}

/// BFS with configuration.
pub fn bfs_with_config(
    adj: &CsrMatrix,
    sources: &[NodeId],
    config: &BfsConfig,
) -> Result<Vec<Distance>> {
    check_sources(adj, sources)?;

    let mut distances = vec![Distance::INFINITY; adj.num_nodes()];
    let mut queue = VecDeque::new();

    for &src in sources {
        if !distances[src.index()].is_reachable() {
            distances[src.index()] = Distance::ZERO;
            queue.push_back(src);
        }
    }

    while let Some(node) = queue.pop_front() {
        let current = distances[node.index()];
        if current.get() >= config.max_distance {
            continue;
        }

        for &next in adj.neighbors(node) {
            if !distances[next as usize].is_reachable() {
                distances[next as usize] = current.increment();
                queue.push_back(NodeId(next));
            }
        }
    }

    debug!(
        nodes = adj.num_nodes(),
        sources = sources.len(),
        reached = distances.iter().filter(|d| d.is_reachable()).count(),
        "bfs finished"
    );

    Ok(distances)
}

/// Multi-source BFS returning parent pointers for path reconstruction.
///
/// Sources are their own parents; unreached nodes have [`NodeId::INVALID`].
pub fn bfs_with_parents(
    adj: &CsrMatrix,
    sources: &[NodeId],
) -> Result<(Vec<Distance>, Vec<NodeId>)> {
    check_sources(adj, sources)?;

    let n = adj.num_nodes();
    let mut distances = vec![Distance::INFINITY; n];
    let mut parents = vec![NodeId::INVALID; n];
    let mut queue = VecDeque::new();

    for &src in sources {
        if !distances[src.index()].is_reachable() {
            distances[src.index()] = Distance::ZERO;
            parents[src.index()] = src;
            queue.push_back(src);
        }
    }

    while let Some(node) = queue.pop_front() {
        let current = distances[node.index()];
        for &next in adj.neighbors(node) {
            if !distances[next as usize].is_reachable() {
                distances[next as usize] = current.increment();
                parents[next as usize] = node;
                queue.push_back(NodeId(next));
            }
        }
    }

    Ok((distances, parents))
}

/// Reconstruct path from a source to `target` using BFS parent pointers.
///
/// Returns `None` if `target` is out of range or was not reached.
pub fn reconstruct_path(parents: &[NodeId], target: NodeId) -> Option<Vec<NodeId>> {
    if !parents.get(target.index())?.is_valid() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;

    // Walk back to the source, which points at itself
    while parents[current.index()] != current {
        current = parents[current.index()];
        if !current.is_valid() || path.len() > parents.len() {
            return None;
        }
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Nodes reachable from `source`, grouped by hop distance.
///
/// `levels[0] == [source]`; within a level, nodes appear in the order BFS
/// discovered them.
pub fn bfs_levels(adj: &CsrMatrix, source: NodeId) -> Result<Vec<Vec<NodeId>>> {
    check_sources(adj, &[source])?;

    let mut seen = vec![false; adj.num_nodes()];
    seen[source.index()] = true;
    let mut levels = Vec::new();
    let mut frontier = vec![source];

    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for &node in &frontier {
            for &next in adj.neighbors(node) {
                if !seen[next as usize] {
                    seen[next as usize] = true;
                    next_frontier.push(NodeId(next));
                }
            }
        }
        levels.push(std::mem::replace(&mut frontier, next_frontier));
    }

    Ok(levels)
}

/// Depth-first preorder from `source`.
///
/// Neighbours are explored in adjacency order, giving the same sequence as
/// the recursive formulation. Uses an explicit `(node, cursor)` stack.
pub fn dfs_preorder(adj: &CsrMatrix, source: NodeId) -> Result<Vec<NodeId>> {
    check_sources(adj, &[source])?;

    let mut visited = vec![false; adj.num_nodes()];
    visited[source.index()] = true;
    let mut order = vec![source];
    let mut frames: Vec<(NodeId, usize)> = vec![(source, 0)];

    while let Some(frame) = frames.last_mut() {
        let (node, cursor) = *frame;
        match adj.neighbors(node).get(cursor) {
            Some(&next) => {
                frame.1 += 1;
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    order.push(NodeId(next));
                    frames.push((NodeId(next), 0));
                }
            }
            None => {
                frames.pop();
            }
        }
    }

    Ok(order)
}
