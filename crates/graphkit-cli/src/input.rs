//! Edge-list input format.
//!
//! ```text
//! # comments and blank lines are ignored
//! 4            <- node count
//! 0 1 5        <- edge 0 -> 1 (or 0 - 1) with weight 5
//! 1 2          <- weight defaults to 1
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use graphkit::{CsrMatrix, CsrMatrixBuilder, NodeId, WeightedGraph};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Parsed edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of nodes.
    pub num_nodes: usize,
    /// `(source, target, weight)` in input order.
    pub edges: Vec<(u32, u32, i64)>,
}

impl EdgeList {
    /// Read from `path`, or from stdin when `path` is `None` or `-`.
    pub fn read(path: Option<&Path>) -> CliResult<Self> {
        let text = match path {
            Some(p) if p != Path::new("-") => fs::read_to_string(p)?,
            _ => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let list = Self::parse(&text)?;
        debug!(
            nodes = list.num_nodes,
            edges = list.edges.len(),
            "edge list loaded"
        );
        Ok(list)
    }

    /// Parse the text format.
    pub fn parse(text: &str) -> CliResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (first, header) = lines.next().ok_or(CliError::EmptyInput)?;
        let num_nodes: usize = header
            .parse()
            .map_err(|_| CliError::parse(first, format!("expected node count, got '{header}'")))?;

        let mut edges = Vec::new();
        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (u, v, w) = match fields.as_slice() {
                [u, v] => (*u, *v, None),
                [u, v, w] => (*u, *v, Some(*w)),
                _ => {
                    return Err(CliError::parse(
                        line_no,
                        format!("expected 'u v [w]', got '{line}'"),
                    ))
                }
            };
            let node = |s: &str| {
                s.parse::<u32>()
                    .map_err(|_| CliError::parse(line_no, format!("invalid node '{s}'")))
            };
            let weight = match w {
                Some(w) => w
                    .parse::<i64>()
                    .map_err(|_| CliError::parse(line_no, format!("invalid weight '{w}'")))?,
                None => 1,
            };
            edges.push((node(u)?, node(v)?, weight));
        }

        Ok(Self { num_nodes, edges })
    }

    /// Weighted graph view.
    pub fn weighted(&self, directed: bool) -> CliResult<WeightedGraph<i64>> {
        let graph = if directed {
            WeightedGraph::directed(self.num_nodes, &self.edges)?
        } else {
            WeightedGraph::undirected(self.num_nodes, &self.edges)?
        };
        Ok(graph)
    }

    /// Unweighted adjacency view.
    pub fn adjacency(&self, directed: bool) -> CliResult<CsrMatrix> {
        let mut builder = CsrMatrixBuilder::new(self.num_nodes);
        if !directed {
            builder = builder.undirected();
        }
        for &(u, v, _) in &self.edges {
            builder.add_edge(u, v);
        }
        Ok(builder.build()?)
    }

    /// Endpoint pairs, for the union-find helpers.
    pub fn pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.edges
            .iter()
            .map(|&(u, v, _)| (NodeId(u), NodeId(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit::GraphError;

    #[test]
    fn test_parse_with_comments_and_default_weight() {
        let text = "# sample\n\n4\n0 1 5\n1 2\n  # indented comment\n2 3 -7\n";
        let list = EdgeList::parse(text).unwrap();

        assert_eq!(list.num_nodes, 4);
        assert_eq!(list.edges, vec![(0, 1, 5), (1, 2, 1), (2, 3, -7)]);
    }

    #[test]
    fn test_parse_errors_report_line() {
        match EdgeList::parse("3\n0 1\n0 x\n") {
            Err(CliError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(matches!(
            EdgeList::parse("3\n0 1 2 3\n"),
            Err(CliError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            EdgeList::parse("three\n"),
            Err(CliError::Parse { line: 1, .. })
        ));
        assert!(matches!(EdgeList::parse("# only\n"), Err(CliError::EmptyInput)));
    }

    #[test]
    fn test_graph_views() {
        let list = EdgeList::parse("3\n0 1 2\n1 2 3\n").unwrap();

        let directed = list.weighted(true).unwrap();
        assert!(directed.is_directed());
        assert_eq!(directed.num_edges(), 2);

        let adj = list.adjacency(false).unwrap();
        assert_eq!(adj.num_arcs(), 4);
        assert_eq!(list.pairs()[1], (NodeId(1), NodeId(2)));
    }

    #[test]
    fn test_out_of_range_node_is_graph_error() {
        let list = EdgeList::parse("2\n0 5\n").unwrap();
        assert!(matches!(
            list.weighted(false),
            Err(CliError::Graph(GraphError::InvalidNodeId { node: 5, .. }))
        ));
        assert!(list.adjacency(true).is_err());
    }
}
