//! Strongly Connected Components (SCC) algorithms.
//!
//! A strongly connected component is a maximal subgraph where every node
//! can reach every other node. This module provides:
//!
//! - Kosaraju's algorithm (two passes, labels in topological order)
//! - Tarjan's algorithm (single pass, O(V+E))
//!
//! Both walk the graph with explicit `(node, cursor)` frames, so deep graphs
//! cannot overflow the call stack. On an undirected matrix every arc has a
//! reverse, and the components are the connected components.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{ComponentId, CsrMatrix, CsrMatrixBuilder, NodeId};
use crate::{GraphError, Result};

/// SCC configuration.
#[derive(Debug, Clone, Default)]
pub struct SccConfig {
    /// Return components in topological order.
    pub topological_order: bool,
}

impl SccConfig {
    /// Create new SCC configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return components in topological order.
    pub fn with_topological_order(mut self) -> Self {
        self.topological_order = true;
        self
    }
}

/// Kosaraju's SCC algorithm.
///
/// Two-pass algorithm:
/// 1. DFS on original graph, record finish order
/// 2. DFS on transposed graph in reverse finish order
///
/// Returns a component ID per node. Labels follow the topological order of
/// the condensation: if component `a` has an arc into component `b`, then
/// `a < b`.
///
/// Fails with [`GraphError::InvalidCsr`] if `adj` does not pass
/// [`CsrMatrix::validate`].
///
/// # Example
///
/// ```
/// use graphkit::{scc_kosaraju, CsrMatrix};
///
/// let adj = CsrMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 0)])?;
/// let components = scc_kosaraju(&adj)?;
/// assert_eq!(components[0], components[2]);
/// assert_ne!(components[0], components[3]);
/// # Ok::<(), graphkit::GraphError>(())
/// ```
pub fn scc_kosaraju(adj: &CsrMatrix) -> Result<Vec<ComponentId>> {
    adj.validate()?;
    let n = adj.num_nodes();

    // Pass 1: DFS on original graph, record finish order
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    for start in 0..n {
        if !visited[start] {
            dfs(adj, NodeId(start as u32), &mut visited, |node| {
                finish_order.push(node)
            });
        }
    }

    // Pass 2: DFS on transposed graph in reverse finish order
    let transposed = adj.transpose();
    let mut component = vec![ComponentId::UNASSIGNED; n];
    let mut current_component = 0u32;
    visited.fill(false);

    for &node in finish_order.iter().rev() {
        if visited[node.index()] {
            continue;
        }
        let label = ComponentId::new(current_component);
        dfs(&transposed, node, &mut visited, |member| {
            component[member.index()] = label
        });
        current_component += 1;
    }

    debug!(
        nodes = n,
        arcs = adj.num_arcs(),
        components = current_component,
        "kosaraju finished"
    );

    Ok(component)
}

/// Iterative DFS from `start` over unvisited nodes. `on_finish` is called for
/// each node once all of its descendants are done (post-order).
fn dfs(
    adj: &CsrMatrix,
    start: NodeId,
    visited: &mut [bool],
    mut on_finish: impl FnMut(NodeId),
) {
    visited[start.index()] = true;
    let mut frames: Vec<(NodeId, usize)> = vec![(start, 0)]; // (node, cursor)

    while let Some(frame) = frames.last_mut() {
        let (node, cursor) = *frame;
        match adj.neighbors(node).get(cursor) {
            Some(&next) => {
                frame.1 += 1;
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    frames.push((NodeId(next), 0));
                }
            }
            None => {
                frames.pop();
                on_finish(node);
            }
        }
    }
}

/// Strongly connected components as member lists.
///
/// Components appear in topological order of the condensation; members of
/// each component are sorted ascending.
pub fn strongly_connected_components(adj: &CsrMatrix) -> Result<Vec<Vec<NodeId>>> {
    let components = scc_kosaraju(adj)?;
    Ok(get_component_members(&components))
}

/// Tarjan's SCC algorithm.
///
/// Uses DFS with lowlink values to find SCCs in O(V+E) time.
/// Returns component ID for each node, in reverse topological order.
pub fn scc_tarjan(adj: &CsrMatrix) -> Result<Vec<ComponentId>> {
    scc_tarjan_with_config(adj, &SccConfig::default())
}

/// Tarjan's algorithm with configuration.
pub fn scc_tarjan_with_config(adj: &CsrMatrix, config: &SccConfig) -> Result<Vec<ComponentId>> {
    adj.validate()?;
    let n = adj.num_nodes();
    let mut component = vec![ComponentId::UNASSIGNED; n];
    let mut index = vec![u32::MAX; n]; // Discovery index
    let mut lowlink = vec![u32::MAX; n];
    let mut on_stack = vec![false; n];
    let mut stack = Vec::new();

    let mut current_index = 0u32;
    let mut current_component = 0u32;

    for start in 0..n {
        if index[start] != u32::MAX {
            continue;
        }

        let mut frames: Vec<(usize, usize)> = Vec::new(); // (node, cursor)
        let mut enter = Some(start);

        loop {
            if let Some(v) = enter.take() {
                index[v] = current_index;
                lowlink[v] = current_index;
                current_index += 1;
                stack.push(v);
                on_stack[v] = true;
                frames.push((v, 0));
            }

            let Some(frame) = frames.last_mut() else {
                break;
            };
            let (v, cursor) = *frame;
            let neighbors = adj.neighbors(NodeId(v as u32));

            if let Some(&w) = neighbors.get(cursor) {
                frame.1 += 1;
                let w = w as usize;
                if index[w] == u32::MAX {
                    enter = Some(w);
                } else if on_stack[w] {
                    // Back edge to node in current SCC
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            // All neighbors processed
            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }

            // Check if v is root of an SCC
            if lowlink[v] == index[v] {
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    component[w] = ComponentId::new(current_component);
                    if w == v {
                        break;
                    }
                }
                current_component += 1;
            }
        }
    }

    // Tarjan closes sink components first.
    if config.topological_order {
        for c in component.iter_mut() {
            *c = ComponentId::new(current_component - 1 - c.0);
        }
    }

    debug!(
        nodes = n,
        arcs = adj.num_arcs(),
        components = current_component,
        "tarjan scc finished"
    );

    Ok(component)
}

/// Get number of SCCs from component assignment.
pub fn count_components(components: &[ComponentId]) -> usize {
    components
        .iter()
        .filter(|c| c.is_assigned())
        .map(|c| c.0 as usize + 1)
        .max()
        .unwrap_or(0)
}

/// Get nodes in each component, indexed by component ID.
pub fn get_component_members(components: &[ComponentId]) -> Vec<Vec<NodeId>> {
    let mut members = vec![Vec::new(); count_components(components)];

    // Ascending node order keeps every member list sorted.
    for (node_id, &comp_id) in components.iter().enumerate() {
        if comp_id.is_assigned() {
            members[comp_id.0 as usize].push(NodeId(node_id as u32));
        }
    }

    members
}

/// Condensation DAG: one node per component, one arc per pair of components
/// joined by at least one arc of `adj`.
///
/// # Errors
///
/// [`GraphError::InvalidCsr`] if `components` does not label every node of
/// `adj`.
pub fn condensation(adj: &CsrMatrix, components: &[ComponentId]) -> Result<CsrMatrix> {
    adj.validate()?;
    if components.len() != adj.num_nodes() || components.iter().any(|c| !c.is_assigned()) {
        return Err(GraphError::InvalidCsr(format!(
            "component labels cover {} of {} nodes",
            components.iter().filter(|c| c.is_assigned()).count(),
            adj.num_nodes()
        )));
    }

    let mut arcs = BTreeSet::new();
    for (u, &cu) in components.iter().enumerate() {
        for &v in adj.neighbors(NodeId(u as u32)) {
            let cv = components[v as usize];
            if cu != cv {
                arcs.insert((cu.0, cv.0));
            }
        }
    }

    let edges: Vec<(u32, u32)> = arcs.into_iter().collect();
    CsrMatrixBuilder::new(count_components(components))
        .with_edges(&edges)
        .build()
}
