//! Bridges and articulation points (Tarjan low-link).
//!
//! - Bridge: an edge whose removal increases the number of connected components
//! - Articulation point: a node whose removal does the same
//!
//! One DFS per connected component records a discovery time `disc[u]` and a
//! low-link `low[u]`: the smallest discovery time reachable from `u`'s subtree
//! using tree edges plus at most one back edge. The arc back to the DFS parent
//! is skipped by edge identity, not by node, so the second of two parallel
//! edges is a back edge and neither is a bridge.
//!
//! Time complexity: O(V + E)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CsrMatrix, EdgeId, NodeId};
use crate::{GraphError, Result};

/// A bridge edge. `u` is the DFS parent of `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bridge {
    /// Edge ID in the input graph.
    pub edge: EdgeId,
    /// Endpoint discovered first.
    pub u: NodeId,
    /// Endpoint discovered from `u`.
    pub v: NodeId,
}

/// Result of bridge and articulation point analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BridgeAnalysis {
    /// Bridges in the order they were found (when the child's subtree finished).
    pub bridges: Vec<Bridge>,
    /// Articulation points, sorted ascending.
    pub articulation_points: Vec<NodeId>,
}

impl BridgeAnalysis {
    /// Whether `edge` is a bridge.
    pub fn is_bridge(&self, edge: EdgeId) -> bool {
        self.bridges.iter().any(|b| b.edge == edge)
    }

    /// Whether `node` is an articulation point.
    pub fn is_articulation_point(&self, node: NodeId) -> bool {
        self.articulation_points.binary_search(&node).is_ok()
    }

    /// Check if there are any bridges.
    pub fn has_bridges(&self) -> bool {
        !self.bridges.is_empty()
    }
}

/// DFS frame. `parent_edge` is [`EdgeId::NONE`] for the root of a DFS tree.
struct Frame {
    node: NodeId,
    parent_edge: EdgeId,
    cursor: usize,
    children: usize,
}

impl Frame {
    fn new(node: NodeId, parent_edge: EdgeId) -> Self {
        Self {
            node,
            parent_edge,
            cursor: 0,
            children: 0,
        }
    }

    fn is_root(&self) -> bool {
        self.parent_edge == EdgeId::NONE
    }
}

const UNVISITED: u32 = u32::MAX;

/// Find every bridge and articulation point of an undirected graph.
///
/// The graph may be disconnected; the search restarts from each unvisited
/// node in ascending order. Self-loops never affect the result.
///
/// # Errors
///
/// [`GraphError::DirectionMismatch`] if `adj` is directed.
///
/// # Example
///
/// ```
/// use graphkit::{bridges_and_articulation_points, CsrMatrix, NodeId};
///
/// // Path 0 - 1 - 2
/// let adj = CsrMatrix::from_undirected_edges(3, &[(0, 1), (1, 2)])?;
/// let analysis = bridges_and_articulation_points(&adj)?;
/// assert_eq!(analysis.bridges.len(), 2);
/// assert_eq!(analysis.articulation_points, vec![NodeId(1)]);
/// # Ok::<(), graphkit::GraphError>(())
/// ```
pub fn bridges_and_articulation_points(adj: &CsrMatrix) -> Result<BridgeAnalysis> {
    adj.validate()?;
    if adj.is_directed() {
        return Err(GraphError::DirectionMismatch {
            expected: "undirected",
        });
    }

    let n = adj.num_nodes();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut is_articulation = vec![false; n];
    let mut bridges = Vec::new();
    let mut time = 0u32;

    for start in 0..n {
        if disc[start] != UNVISITED {
            continue;
        }

        disc[start] = time;
        low[start] = time;
        time += 1;
        let mut frames = vec![Frame::new(NodeId(start as u32), EdgeId::NONE)];

        while let Some(frame) = frames.last_mut() {
            let u = frame.node;
            let cursor = frame.cursor;
            let neighbors = adj.neighbors(u);

            if cursor < neighbors.len() {
                frame.cursor += 1;
                let v = neighbors[cursor] as usize;
                let edge = adj.arc_edges(u)[cursor];

                if edge == frame.parent_edge || v == u.index() {
                    continue; // Tree edge back to parent, or self-loop
                }

                if disc[v] == UNVISITED {
                    frame.children += 1;
                    disc[v] = time;
                    low[v] = time;
                    time += 1;
                    frames.push(Frame::new(NodeId(v as u32), edge));
                } else {
                    // Back edge
                    low[u.index()] = low[u.index()].min(disc[v]);
                }
                continue;
            }

            // Subtree of u is done
            let Some(done) = frames.pop() else {
                break;
            };
            match frames.last() {
                Some(parent) => {
                    let p = parent.node.index();
                    low[p] = low[p].min(low[u.index()]);

                    if low[u.index()] > disc[p] {
                        bridges.push(Bridge {
                            edge: done.parent_edge,
                            u: parent.node,
                            v: u,
                        });
                    }
                    if !parent.is_root() && low[u.index()] >= disc[p] {
                        is_articulation[p] = true;
                    }
                }
                None => {
                    // Root rule
                    if done.children > 1 {
                        is_articulation[u.index()] = true;
                    }
                }
            }
        }
    }

    let articulation_points: Vec<NodeId> = is_articulation
        .iter()
        .enumerate()
        .filter(|&(_, &ap)| ap)
        .map(|(i, _)| NodeId(i as u32))
        .collect();

    debug!(
        nodes = n,
        edges = adj.num_edges,
        bridges = bridges.len(),
        articulation_points = articulation_points.len(),
        "bridge analysis finished"
    );

    Ok(BridgeAnalysis {
        bridges,
        articulation_points,
    })
}
