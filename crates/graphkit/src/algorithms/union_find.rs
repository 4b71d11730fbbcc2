//! Union-Find (Disjoint Set) data structure.
//!
//! Union-Find efficiently tracks connected components in undirected graphs.
//! Supports:
//! - `find(x)`: Find representative of x's component
//! - `union(x, y)`: Merge components containing x and y
//!
//! Uses path compression and union by size for near O(1) amortized operations.
//!
//! The parent array doubles as the size table: a negative entry `-k` marks a
//! root whose set has `k` members, a non-negative entry is a parent pointer.

use crate::models::csr::check_size;
use crate::models::{ComponentId, CsrMatrix, NodeId};
use crate::{check_node, Result};

/// Union-Find data structure with path compression and union by size.
///
/// Methods index the parent array directly; passing a node outside
/// `[0, len())` panics like any out-of-bounds slice access. The edge-list
/// helpers in this module validate their input instead.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `parent[i] < 0`: i is a root of a set of size `-parent[i]`.
    /// `parent[i] >= 0`: parent pointer.
    parent: Vec<i64>,
    /// Number of components.
    num_components: usize,
}

impl UnionFind {
    /// Create new Union-Find with n singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![-1; n],
            num_components: n,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Find representative of node's component with path compression.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.index();

        // Find root
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }

        // Path compression: point all nodes on path directly to root
        let mut node = x.index();
        while node != root {
            let next = self.parent[node] as usize;
            self.parent[node] = root as i64;
            node = next;
        }

        NodeId(root as u32)
    }

    /// Union two components by size.
    ///
    /// Returns true if a merge occurred (x and y were in different components).
    /// The smaller set is attached under the root of the larger; on equal
    /// sizes the lower root index stays the root.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x).index();
        let root_y = self.find(y).index();

        if root_x == root_y {
            return false; // Already in same component
        }

        // Sizes are stored negated, so "more negative" is larger.
        let (keep, absorb) = match self.parent[root_x].cmp(&self.parent[root_y]) {
            std::cmp::Ordering::Less => (root_x, root_y),
            std::cmp::Ordering::Greater => (root_y, root_x),
            std::cmp::Ordering::Equal => (root_x.min(root_y), root_x.max(root_y)),
        };

        self.parent[keep] += self.parent[absorb];
        self.parent[absorb] = keep as i64;

        self.num_components -= 1;
        true
    }

    /// Check if two nodes are in the same component.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Get the size of the component containing node x.
    pub fn size_of(&mut self, x: NodeId) -> usize {
        let root = self.find(x);
        (-self.parent[root.index()]) as usize
    }

    /// Get component ID for each node.
    ///
    /// Returns a vector where `result[i]` is the component ID of node i.
    /// Component IDs are assigned 0, 1, 2, ... in order of each component's
    /// lowest node.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut comp_id = vec![ComponentId::UNASSIGNED; n];
        let mut next_id = 0u32;

        for i in 0..n {
            let root = self.find(NodeId(i as u32)).index();

            // Assign ID to root if not already assigned
            if !comp_id[root].is_assigned() {
                comp_id[root] = ComponentId::new(next_id);
                next_id += 1;
            }

            // Copy root's ID to this node
            comp_id[i] = comp_id[root];
        }

        comp_id
    }
}

fn check_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Result<()> {
    check_size("node", n, CsrMatrix::MAX_NODES)?;
    for &(u, v) in edges {
        check_node(u, n)?;
        check_node(v, n)?;
    }
    Ok(())
}

/// Whether an undirected graph contains a cycle.
///
/// Returns true at the first edge whose endpoints are already joined,
/// including self-loops and parallel edges. Not meaningful for directed
/// graphs.
pub fn has_cycle(n: usize, edges: &[(NodeId, NodeId)]) -> Result<bool> {
    check_edges(n, edges)?;

    let mut uf = UnionFind::new(n);
    Ok(edges.iter().any(|&(u, v)| !uf.union(u, v)))
}

/// Number of connected components of an undirected graph.
pub fn count_connected_components(n: usize, edges: &[(NodeId, NodeId)]) -> Result<usize> {
    check_edges(n, edges)?;

    let mut uf = UnionFind::new(n);
    for &(u, v) in edges {
        uf.union(u, v);
    }
    Ok(uf.num_components())
}

/// Connected component label of every node of an undirected graph.
pub fn connected_components(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Vec<ComponentId>> {
    check_edges(n, edges)?;

    let mut uf = UnionFind::new(n);
    for &(u, v) in edges {
        uf.union(u, v);
    }
    Ok(uf.component_ids())
}
