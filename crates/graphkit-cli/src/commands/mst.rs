//! `graphkit mst` command - Minimum spanning tree / forest.

use colored::Colorize;
use graphkit::{minimum_spanning_tree, SpanningForest};
use serde_json::{json, Value};

use super::{print_heading, print_json, sum_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `mst` command.
pub fn execute(list: &EdgeList, directed: bool, format: OutputFormat) -> CliResult<()> {
    let graph = list.weighted(directed)?;
    let forest = minimum_spanning_tree(&graph)?;

    if format == OutputFormat::Json {
        return print_json(&json_report(&forest));
    }

    let title = if forest.is_spanning {
        "Minimum Spanning Tree"
    } else {
        "Minimum Spanning Forest"
    };
    print_heading(title);
    for (edge, id) in forest.edges.iter().zip(&forest.edge_ids) {
        println!(
            "  {} {} - {} ({}) {}",
            "•".dimmed(),
            edge.source,
            edge.target,
            edge.weight.to_string().bright_yellow(),
            format!("#{id}").dimmed()
        );
    }
    println!();
    println!(
        "  Total weight: {}",
        forest.total_weight.to_string().bright_white()
    );
    if forest.is_spanning {
        println!("  {} Graph is connected", "✓".bright_green());
    } else {
        println!(
            "  {} Graph is disconnected: {} trees",
            "⚠".yellow(),
            forest.num_trees(graph.num_nodes())
        );
    }

    Ok(())
}

fn json_report(forest: &SpanningForest<i64>) -> Value {
    json!({
        "total_weight": sum_json(forest.total_weight),
        "is_spanning": forest.is_spanning,
        "edges": forest.edges,
        "edge_ids": forest.edge_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use graphkit::GraphError;

    #[test]
    fn test_mst_text_and_json() {
        let list = EdgeList::parse("4\n0 1 4\n1 2 1\n0 2 3\n2 3 2\n").unwrap();
        assert!(execute(&list, false, OutputFormat::Text).is_ok());
        assert!(execute(&list, false, OutputFormat::Json).is_ok());

        let forest = minimum_spanning_tree(&list.weighted(false).unwrap()).unwrap();
        let report = json_report(&forest);
        assert_eq!(report["total_weight"], 6);
        assert_eq!(report["is_spanning"], true);
    }

    #[test]
    fn test_forest_on_disconnected_input() {
        let list = EdgeList::parse("4\n0 1 1\n2 3 1\n").unwrap();
        assert!(execute(&list, false, OutputFormat::Text).is_ok());
        assert!(execute(&list, false, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_total_weight_beyond_i64() {
        let list =
            EdgeList::parse("3\n0 1 -9223372036854775808\n1 2 -9223372036854775808\n").unwrap();
        assert!(execute(&list, false, OutputFormat::Json).is_ok());
        assert!(execute(&list, false, OutputFormat::Text).is_ok());

        let forest = minimum_spanning_tree(&list.weighted(false).unwrap()).unwrap();
        assert_eq!(
            json_report(&forest)["total_weight"],
            "-18446744073709551616"
        );
    }

    #[test]
    fn test_directed_input_rejected() {
        let list = EdgeList::parse("2\n0 1 1\n").unwrap();
        assert!(matches!(
            execute(&list, true, OutputFormat::Text),
            Err(CliError::Graph(GraphError::DirectionMismatch { .. }))
        ));
    }
}
