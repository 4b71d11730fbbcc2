//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`CsrMatrix`]: Compressed Sparse Row adjacency with edge identity
//! - [`WeightedGraph`]: Edge list plus CSR view, generic over [`Weight`]
//! - [`NodeId`], [`EdgeId`], [`Distance`], [`ComponentId`]: Graph index types

pub mod csr;
pub mod node;
pub mod weight;
pub mod weighted;

pub use csr::{CsrMatrix, CsrMatrixBuilder};
pub use node::{ComponentId, Distance, EdgeId, NodeId};
pub use weight::{Weight, WeightSum};
pub use weighted::{Edge, WeightedGraph};
