//! CLI command implementations.

pub mod bellman_ford;
pub mod bfs;
pub mod bridges;
pub mod components;
pub mod dijkstra;
pub mod mst;
pub mod scc;

use colored::Colorize;
use graphkit::NodeId;
use serde_json::Value;

use crate::error::CliResult;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// JSON value for a widened weight sum.
///
/// `serde_json::Value` holds integers only within the `i64`/`u64` range;
/// larger sums are written as decimal strings.
pub fn sum_json(sum: i128) -> Value {
    if let Ok(v) = i64::try_from(sum) {
        Value::from(v)
    } else if let Ok(v) = u64::try_from(sum) {
        Value::from(v)
    } else {
        Value::String(sum.to_string())
    }
}

/// Print a JSON document to stdout.
pub fn print_json(value: &Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a report heading.
pub fn print_heading(title: &str) {
    println!("{}:", title.bright_white().underline());
}

/// Format a node sequence as `a -> b -> c`.
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format a node list as `a, b, c`, or a dimmed `none`.
pub fn format_nodes(nodes: &[NodeId]) -> String {
    if nodes.is_empty() {
        return "none".dimmed().to_string();
    }
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
