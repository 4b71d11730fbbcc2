//! `graphkit dijkstra` command - Shortest paths with non-negative weights.

use colored::Colorize;
use graphkit::{dijkstra_with_config, DijkstraConfig, NodeId, ShortestPaths};
use serde_json::{json, Value};

use super::{format_path, print_heading, print_json, sum_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `dijkstra` command.
pub fn execute(
    list: &EdgeList,
    directed: bool,
    source: u32,
    target: Option<u32>,
    format: OutputFormat,
) -> CliResult<()> {
    let graph = list.weighted(directed)?;
    let mut config = DijkstraConfig::new();
    if let Some(t) = target {
        config = config.with_target(NodeId(t));
    }
    let paths = dijkstra_with_config(&graph, NodeId(source), &config)?;

    // With a target only that node's answer is exact.
    let nodes: Vec<NodeId> = match target {
        Some(t) => vec![NodeId(t)],
        None => (0..graph.num_nodes() as u32).map(NodeId).collect(),
    };

    if format == OutputFormat::Json {
        return print_json(&json_report(source, &nodes, &paths));
    }

    print_heading(&format!("Shortest paths from {source}"));
    for n in nodes {
        match (paths.distance(n), paths.path_to(n)) {
            (Some(d), Some(path)) => println!(
                "  {:>6}  {:>10}  {}",
                n.to_string().bright_white(),
                d.to_string().bright_yellow(),
                format_path(&path).dimmed()
            ),
            _ => println!(
                "  {:>6}  {:>10}",
                n.to_string().bright_white(),
                "unreachable".dimmed()
            ),
        }
    }

    Ok(())
}

fn json_report(source: u32, nodes: &[NodeId], paths: &ShortestPaths<i128>) -> Value {
    let rows: Vec<_> = nodes
        .iter()
        .map(|&n| {
            json!({
                "node": n,
                "distance": paths.distance(n).map(sum_json),
                "path": paths.path_to(n),
            })
        })
        .collect();
    json!({ "source": source, "results": rows })
}
