//! Compressed Sparse Row (CSR) adjacency format.
//!
//! CSR is an efficient format for sparse graphs that enables:
//! - O(1) access to row start/end positions
//! - O(degree) iteration over neighbors
//! - Cache-friendly sequential access patterns
//!
//! Memory layout:
//! - `row_ptr[i]` = starting index in col_idx for row i
//! - `col_idx[row_ptr[i]..row_ptr[i+1]]` = column indices (neighbors) of row i
//! - `edge_ids[k]` = index of the input edge that produced arc `k`
//!
//! An undirected edge `{u, v}` is stored as the two arcs `u -> v` and `v -> u`
//! sharing one edge ID. Within a row, arcs keep the order of the input edges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::node::{EdgeId, NodeId};
use crate::{GraphError, Result};

/// Compressed Sparse Row adjacency for a graph with dense node indices.
///
/// For a graph with N nodes and M arcs:
/// - `row_ptr`: N+1 elements, where row_ptr[i] is the start of row i's arcs
/// - `col_idx`: M elements, the target node of each arc
/// - `edge_ids`: M elements, the originating edge of each arc
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CsrMatrix {
    /// Number of rows (nodes).
    pub num_rows: usize,
    /// Row pointers (length = num_rows + 1).
    pub row_ptr: Vec<u64>,
    /// Column indices (length = number of arcs).
    pub col_idx: Vec<u32>,
    /// Edge identity per arc (length = number of arcs).
    pub edge_ids: Vec<EdgeId>,
    /// Number of edges the matrix was built from.
    pub num_edges: usize,
    /// Whether arcs are one-way. Undirected matrices are symmetric.
    pub directed: bool,
}

impl CsrMatrix {
    /// Create a directed CSR matrix with no arcs.
    pub fn empty(num_nodes: usize) -> Self {
        Self {
            num_rows: num_nodes,
            row_ptr: vec![0; num_nodes + 1],
            col_idx: Vec::new(),
            edge_ids: Vec::new(),
            num_edges: 0,
            directed: true,
        }
    }

    /// Create a directed CSR from an edge list.
    ///
    /// # Arguments
    ///
    /// * `num_nodes` - Number of nodes in the graph
    /// * `edges` - List of (source, destination) pairs
    ///
    /// # Example
    ///
    /// ```
    /// use graphkit::CsrMatrix;
    ///
    /// // Graph: 0 -> 1 -> 2
    /// let csr = CsrMatrix::from_edges(3, &[(0, 1), (1, 2)])?;
    /// assert_eq!(csr.num_arcs(), 2);
    /// # Ok::<(), graphkit::GraphError>(())
    /// ```
    pub fn from_edges(num_nodes: usize, edges: &[(u32, u32)]) -> Result<Self> {
        CsrMatrixBuilder::new(num_nodes).with_edges(edges).build()
    }

    /// Create an undirected (symmetric) CSR from an edge list.
    pub fn from_undirected_edges(num_nodes: usize, edges: &[(u32, u32)]) -> Result<Self> {
        CsrMatrixBuilder::new(num_nodes)
            .undirected()
            .with_edges(edges)
            .build()
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_rows
    }

    /// Number of stored arcs (twice the edge count for undirected graphs,
    /// less self-loops).
    pub fn num_arcs(&self) -> usize {
        self.col_idx.len()
    }

    /// Check if the matrix has no arcs.
    pub fn is_empty(&self) -> bool {
        self.col_idx.is_empty()
    }

    /// Whether arcs are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn row(&self, node: NodeId) -> std::ops::Range<usize> {
        let i = node.index();
        if i >= self.num_rows {
            return 0..0;
        }
        self.row_ptr[i] as usize..self.row_ptr[i + 1] as usize
    }

    /// Get the degree (number of outgoing arcs) of a node.
    pub fn degree(&self, node: NodeId) -> usize {
        self.row(node).len()
    }

    /// Get neighbors of a node. Out-of-range nodes have none.
    pub fn neighbors(&self, node: NodeId) -> &[u32] {
        &self.col_idx[self.row(node)]
    }

    /// Edge IDs of a node's outgoing arcs, parallel to [`neighbors`](Self::neighbors).
    pub fn arc_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.edge_ids[self.row(node)]
    }

    /// Get outgoing arcs of a node as (neighbor, edge) pairs.
    pub fn arcs(&self, node: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        let range = self.row(node);
        self.col_idx[range.clone()]
            .iter()
            .zip(&self.edge_ids[range])
            .map(|(&col, &edge)| (NodeId(col), edge))
    }

    /// Check if an arc exists from src to dst.
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.neighbors(src).contains(&dst.0)
    }

    /// Largest node count a matrix can index. `u32::MAX` is `NodeId::INVALID`.
    pub const MAX_NODES: usize = u32::MAX as usize;

    /// Largest edge count a matrix can index. `u32::MAX` is `EdgeId::NONE`.
    pub const MAX_EDGES: usize = u32::MAX as usize;

    /// Validate CSR structure.
    ///
    /// Algorithms taking a `&CsrMatrix` call this first, so a hand-built
    /// matrix with broken offsets or out-of-range entries is reported as
    /// [`GraphError::InvalidCsr`] instead of panicking mid-traversal.
    pub fn validate(&self) -> Result<()> {
        check_size("node", self.num_rows, Self::MAX_NODES)?;
        check_size("edge", self.num_edges, Self::MAX_EDGES)?;

        // Check row_ptr length
        if self.row_ptr.len() != self.num_rows + 1 {
            return Err(GraphError::InvalidCsr(format!(
                "row_ptr length {} != num_rows + 1 = {}",
                self.row_ptr.len(),
                self.num_rows + 1
            )));
        }

        // Check row_ptr is non-decreasing
        for i in 0..self.num_rows {
            if self.row_ptr[i] > self.row_ptr[i + 1] {
                return Err(GraphError::InvalidCsr(format!(
                    "row_ptr not monotonic at index {}",
                    i
                )));
            }
        }

        // Check final row_ptr matches col_idx length
        let nnz = *self.row_ptr.last().unwrap_or(&0) as usize;
        if nnz != self.col_idx.len() {
            return Err(GraphError::InvalidCsr(format!(
                "row_ptr[-1] = {} != col_idx.len() = {}",
                nnz,
                self.col_idx.len()
            )));
        }

        if self.edge_ids.len() != self.col_idx.len() {
            return Err(GraphError::InvalidCsr(format!(
                "edge_ids.len() = {} != col_idx.len() = {}",
                self.edge_ids.len(),
                self.col_idx.len()
            )));
        }

        // Check col_idx values are in bounds
        for &col in &self.col_idx {
            if col as usize >= self.num_rows {
                return Err(GraphError::InvalidCsr(format!(
                    "col_idx {} >= num_rows {}",
                    col, self.num_rows
                )));
            }
        }

        for &edge in &self.edge_ids {
            if edge.index() >= self.num_edges {
                return Err(GraphError::InvalidCsr(format!(
                    "edge id {} >= num_edges {}",
                    edge.0, self.num_edges
                )));
            }
        }

        Ok(())
    }

    /// Create transpose (reverse graph). Undirected matrices are their own
    /// transpose.
    pub fn transpose(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let n = self.num_rows;
        let mut row_ptr = vec![0u64; n + 1];
        for &col in &self.col_idx {
            row_ptr[col as usize + 1] += 1;
        }
        for i in 1..=n {
            row_ptr[i] += row_ptr[i - 1];
        }

        // Scatter in row order so each transposed row stays sorted by source.
        let mut cursor: Vec<u64> = row_ptr[..n].to_vec();
        let mut col_idx = vec![0u32; self.col_idx.len()];
        let mut edge_ids = vec![EdgeId::NONE; self.col_idx.len()];
        for row in 0..n {
            for (col, edge) in self.arcs(NodeId(row as u32)) {
                let slot = cursor[col.index()] as usize;
                col_idx[slot] = row as u32;
                edge_ids[slot] = edge;
                cursor[col.index()] += 1;
            }
        }

        CsrMatrix {
            num_rows: n,
            row_ptr,
            col_idx,
            edge_ids,
            num_edges: self.num_edges,
            directed: true,
        }
    }
}

pub(crate) fn check_size(what: &str, count: usize, max: usize) -> Result<()> {
    if count > max {
        return Err(GraphError::InvalidCsr(format!(
            "{what} count {count} exceeds {max}"
        )));
    }
    Ok(())
}

/// Builder for CSR matrices.
#[derive(Debug)]
pub struct CsrMatrixBuilder {
    num_nodes: usize,
    directed: bool,
    edges: Vec<(u32, u32)>,
}

impl CsrMatrixBuilder {
    /// Create new builder for a directed graph with the given number of nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            directed: true,
            edges: Vec::new(),
        }
    }

    /// Store every edge in both directions.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Add edges from slice.
    pub fn with_edges(mut self, edges: &[(u32, u32)]) -> Self {
        self.edges.extend_from_slice(edges);
        self
    }

    /// Add a single edge. Its edge ID is its position in insertion order.
    pub fn add_edge(&mut self, src: u32, dst: u32) {
        self.edges.push((src, dst));
    }

    /// Build the CSR matrix, rejecting endpoints outside `[0, num_nodes)`
    /// and node or edge counts that `u32` indices cannot address.
    pub fn build(self) -> Result<CsrMatrix> {
        let n = self.num_nodes;
        check_size("node", n, CsrMatrix::MAX_NODES)?;
        check_size("edge", self.edges.len(), CsrMatrix::MAX_EDGES)?;
        for &(src, dst) in &self.edges {
            for node in [src, dst] {
                if node as usize >= n {
                    return Err(GraphError::invalid_node(u64::from(node), n));
                }
            }
        }

        // Arcs in edge order; an undirected self-loop is stored once.
        let arcs = self.edges.iter().enumerate().flat_map(|(i, &(src, dst))| {
            let back = (!self.directed && src != dst).then_some((dst, src, i));
            std::iter::once((src, dst, i)).chain(back)
        });

        // Build row_ptr
        let mut row_ptr = vec![0u64; n + 1];
        for (src, _, _) in arcs.clone() {
            row_ptr[src as usize + 1] += 1;
        }

        // Cumulative sum
        for i in 1..=n {
            row_ptr[i] += row_ptr[i - 1];
        }

        // Counting sort by source keeps input order within each row
        let nnz = row_ptr[n] as usize;
        let mut cursor: Vec<u64> = row_ptr[..n].to_vec();
        let mut col_idx = vec![0u32; nnz];
        let mut edge_ids = vec![EdgeId::NONE; nnz];
        for (src, dst, i) in arcs {
            let slot = cursor[src as usize] as usize;
            col_idx[slot] = dst;
            edge_ids[slot] = EdgeId::from(i);
            cursor[src as usize] += 1;
        }

        Ok(CsrMatrix {
            num_rows: n,
            row_ptr,
            col_idx,
            edge_ids,
            num_edges: self.edges.len(),
            directed: self.directed,
        })
    }
}
