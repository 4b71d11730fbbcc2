//! `graphkit scc` command - Strongly connected components.

use colored::Colorize;
use graphkit::{condensation, get_component_members, scc_kosaraju};
use serde_json::json;

use super::{format_nodes, print_heading, print_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `scc` command. Components are listed in topological order.
pub fn execute(list: &EdgeList, directed: bool, format: OutputFormat) -> CliResult<()> {
    let adj = list.adjacency(directed)?;
    let labels = scc_kosaraju(&adj)?;
    let members = get_component_members(&labels);
    let dag = condensation(&adj, &labels)?;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "count": members.len(),
            "components": members,
            "condensation_arcs": dag.num_arcs(),
        }));
    }

    print_heading("Strongly Connected Components");
    for (id, nodes) in members.iter().enumerate() {
        println!(
            "  {} {} {}",
            format!("[{id}]").bright_cyan(),
            format_nodes(nodes),
            format!("({} node(s))", nodes.len()).dimmed()
        );
    }
    println!();
    println!(
        "  {} component(s), {} arc(s) in the condensation",
        members.len().to_string().bright_white(),
        dag.num_arcs().to_string().bright_white()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scc_text_and_json() {
        let list = EdgeList::parse("5\n0 1\n1 2\n2 0\n2 3\n3 4\n4 3\n").unwrap();
        assert!(execute(&list, true, OutputFormat::Text).is_ok());
        assert!(execute(&list, true, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_undirected_input_is_one_component_per_connected_part() {
        let list = EdgeList::parse("4\n0 1\n2 3\n").unwrap();
        assert!(execute(&list, false, OutputFormat::Json).is_ok());
    }
}
