//! Graph algorithm implementations.
//!
//! - Union-Find and Kruskal MST for undirected graphs
//! - Dijkstra and Bellman-Ford single-source shortest paths
//! - Kosaraju / Tarjan strongly connected components
//! - Tarjan bridges and articulation points
//! - BFS and DFS traversals

pub mod bellman_ford;
pub mod bridges;
pub mod dijkstra;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod traversal;
pub mod union_find;
