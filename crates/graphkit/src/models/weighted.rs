//! Weighted graphs: an edge list plus its CSR adjacency.
//!
//! The edge list is the canonical description (Kruskal and Bellman-Ford walk
//! it directly); the CSR view serves per-node neighbor scans (Dijkstra) and is
//! the input format for SCC and bridge detection. Both are built once, validated,
//! and never mutated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::csr::{CsrMatrix, CsrMatrixBuilder};
use super::node::{EdgeId, NodeId};
use super::weight::Weight;
use crate::{GraphError, Result};

/// A weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<W> {
    /// Tail (or either endpoint for undirected edges).
    pub source: NodeId,
    /// Head (or the other endpoint for undirected edges).
    pub target: NodeId,
    /// Edge weight.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Create a new edge.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: W) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// Immutable weighted graph over nodes `0..num_nodes`.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W> {
    edges: Vec<Edge<W>>,
    adjacency: CsrMatrix,
}

impl<W: Weight> WeightedGraph<W> {
    /// Build a directed graph from `(source, target, weight)` triples.
    ///
    /// Fails if an endpoint is out of range or a weight is NaN.
    pub fn directed(num_nodes: usize, edges: &[(u32, u32, W)]) -> Result<Self> {
        let edges = edges.iter().map(|&(u, v, w)| Edge::new(u, v, w));
        Self::from_edges(num_nodes, edges, true)
    }

    /// Build an undirected graph from `(u, v, weight)` triples. Each edge is
    /// traversable in both directions.
    pub fn undirected(num_nodes: usize, edges: &[(u32, u32, W)]) -> Result<Self> {
        let edges = edges.iter().map(|&(u, v, w)| Edge::new(u, v, w));
        Self::from_edges(num_nodes, edges, false)
    }

    /// Build a graph from [`Edge`] values.
    pub fn from_edges(
        num_nodes: usize,
        edges: impl IntoIterator<Item = Edge<W>>,
        directed: bool,
    ) -> Result<Self> {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();

        if let Some(edge) = edges.iter().position(|e| e.weight.is_unordered()) {
            return Err(GraphError::InvalidWeight { edge });
        }

        let mut builder = CsrMatrixBuilder::new(num_nodes);
        if !directed {
            builder = builder.undirected();
        }
        for edge in &edges {
            builder.add_edge(edge.source.0, edge.target.0);
        }
        let adjacency = builder.build()?;

        Ok(Self { edges, adjacency })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.num_nodes()
    }

    /// Number of edges (each undirected edge counted once).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.adjacency.is_directed()
    }

    /// The edge list, in construction order. `EdgeId(i)` names `edges()[i]`.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Look up an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edges.get(id.index())
    }

    /// Unweighted CSR view, usable with the SCC, bridge and traversal
    /// algorithms.
    pub fn adjacency(&self) -> &CsrMatrix {
        &self.adjacency
    }

    /// Outgoing `(neighbor, weight)` pairs of a node.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.adjacency
            .arcs(node)
            .map(move |(next, edge)| (next, self.edges[edge.index()].weight))
    }

    /// Every traversable `(tail, head, weight)` arc. Undirected edges yield
    /// both orientations back to back; directed edges yield themselves.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId, W)> + '_ {
        let directed = self.is_directed();
        self.edges.iter().flat_map(move |e| {
            let back =
                (!directed && e.source != e.target).then_some((e.target, e.source, e.weight));
            std::iter::once((e.source, e.target, e.weight)).chain(back)
        })
    }
}
