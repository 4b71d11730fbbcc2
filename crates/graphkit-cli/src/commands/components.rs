//! `graphkit components` command - Connected components and cycle check.

use colored::Colorize;
use graphkit::{connected_components, get_component_members, has_cycle};
use serde_json::json;

use super::{format_nodes, print_heading, print_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `components` command. Edges are treated as undirected.
pub fn execute(list: &EdgeList, format: OutputFormat) -> CliResult<()> {
    let pairs = list.pairs();
    let labels = connected_components(list.num_nodes, &pairs)?;
    let cyclic = has_cycle(list.num_nodes, &pairs)?;
    let members = get_component_members(&labels);

    if format == OutputFormat::Json {
        return print_json(&json!({
            "count": members.len(),
            "has_cycle": cyclic,
            "components": members,
        }));
    }

    print_heading("Connected Components");
    for (id, nodes) in members.iter().enumerate() {
        println!("  {} {}", format!("[{id}]").bright_cyan(), format_nodes(nodes));
    }
    println!();
    println!(
        "  {} component(s); {}",
        members.len().to_string().bright_white(),
        if cyclic {
            "contains a cycle".yellow()
        } else {
            "acyclic (forest)".bright_green()
        }
    );

    Ok(())
}
