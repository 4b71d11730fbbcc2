//! `graphkit bfs` command - Breadth-first levels and depth-first order.

use colored::Colorize;
use graphkit::{bfs_levels, dfs_preorder, NodeId};
use serde_json::json;

use super::{format_nodes, print_heading, print_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `bfs` command.
pub fn execute(
    list: &EdgeList,
    directed: bool,
    source: u32,
    format: OutputFormat,
) -> CliResult<()> {
    let adj = list.adjacency(directed)?;
    let levels = bfs_levels(&adj, NodeId(source))?;
    let preorder = dfs_preorder(&adj, NodeId(source))?;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "source": source,
            "levels": levels,
            "dfs_preorder": preorder,
        }));
    }

    print_heading(&format!("BFS levels from {source}"));
    for (depth, nodes) in levels.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{depth:>4}").bright_cyan(),
            format_nodes(nodes)
        );
    }
    println!();
    print_heading("DFS preorder");
    println!("  {}", format_nodes(&preorder));

    Ok(())
}
