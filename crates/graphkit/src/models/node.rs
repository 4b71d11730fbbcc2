//! Node types for graph algorithms.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`NodeId`]: Dense vertex index in `[0, n)`
//! - [`EdgeId`]: Position of an edge in the edge list a graph was built from
//! - [`Distance`]: BFS distance/level from source
//! - [`ComponentId`]: Component label (connected or strongly connected)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node identifier (vertex index).
///
/// Using a newtype prevents mixing up node IDs with other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node": the predecessor of a source or of an
    /// unreached node, and the DFS parent of a tree root.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Check if this is a valid node ID.
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index into per-node arrays.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        debug_assert!(id < u32::MAX as usize, "node index {id} out of range");
        NodeId(id as u32)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge identifier: the position of an edge in the list a graph was built from.
///
/// Both arcs of an undirected edge carry the same `EdgeId`, which is what lets
/// the bridge finder tell a parallel edge apart from the tree edge it doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// No edge (used for DFS tree roots).
    pub const NONE: EdgeId = EdgeId(u32::MAX);

    /// Create a new edge ID.
    pub const fn new(id: u32) -> Self {
        EdgeId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index into the original edge list.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Callers keep `id` below `u32::MAX`; `CsrMatrixBuilder::build` rejects
/// edge lists long enough to break that.
impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        debug_assert!(id < u32::MAX as usize, "edge index {id} out of range");
        EdgeId(id as u32)
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distance from source in BFS.
///
/// Also known as "level" or "hop count".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Distance(pub u32);

impl Distance {
    /// Infinity (unreachable).
    pub const INFINITY: Distance = Distance(u32::MAX);

    /// Zero distance (source node).
    pub const ZERO: Distance = Distance(0);

    /// Create a new distance.
    pub const fn new(d: u32) -> Self {
        Distance(d)
    }

    /// Check if node is reachable.
    pub const fn is_reachable(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Increment distance by 1, saturating at infinity.
    pub const fn increment(&self) -> Self {
        if self.0 == u32::MAX {
            Distance::INFINITY
        } else {
            Distance(self.0.saturating_add(1))
        }
    }
}

impl From<u32> for Distance {
    fn from(d: u32) -> Self {
        Distance(d)
    }
}

/// Component identifier.
///
/// Nodes in the same component have the same ComponentId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component.
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ComponentId {
    fn from(id: u32) -> Self {
        ComponentId(id)
    }
}
