//! `graphkit bridges` command - Bridges and articulation points.

use colored::Colorize;
use graphkit::bridges_and_articulation_points;
use serde_json::json;

use super::{format_nodes, print_heading, print_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `bridges` command. Requires an undirected graph.
pub fn execute(list: &EdgeList, directed: bool, format: OutputFormat) -> CliResult<()> {
    let adj = list.adjacency(directed)?;
    let analysis = bridges_and_articulation_points(&adj)?;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "bridges": analysis.bridges,
            "articulation_points": analysis.articulation_points,
        }));
    }

    print_heading("Bridges");
    if analysis.bridges.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for bridge in &analysis.bridges {
        println!(
            "  {} {} -- {} {}",
            "•".dimmed(),
            bridge.u,
            bridge.v,
            format!("#{}", bridge.edge).dimmed()
        );
    }
    println!();
    print_heading("Articulation Points");
    println!("  {}", format_nodes(&analysis.articulation_points));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use graphkit::GraphError;

    #[test]
    fn test_bridges_text_and_json() {
        // Triangle 0-1-2 with a tail 2-3.
        let list = EdgeList::parse("4\n0 1\n1 2\n2 0\n2 3\n").unwrap();
        assert!(execute(&list, false, OutputFormat::Text).is_ok());
        assert!(execute(&list, false, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_no_bridges() {
        let list = EdgeList::parse("3\n0 1\n1 2\n2 0\n").unwrap();
        assert!(execute(&list, false, OutputFormat::Text).is_ok());
    }

    #[test]
    fn test_directed_input_rejected() {
        let list = EdgeList::parse("2\n0 1\n").unwrap();
        assert!(matches!(
            execute(&list, true, OutputFormat::Json),
            Err(CliError::Graph(GraphError::DirectionMismatch { .. }))
        ));
    }
}
