//! `graphkit bellman-ford` command - Shortest paths with negative weights.

use colored::Colorize;
use graphkit::{bellman_ford, BellmanFordResult, NodeId};
use serde_json::{json, Value};

use super::{format_path, print_heading, print_json, sum_json, OutputFormat};
use crate::error::CliResult;
use crate::input::EdgeList;

/// Execute the `bellman-ford` command.
///
/// A negative cycle is a result, not a failure: it is reported and the
/// command still succeeds.
pub fn execute(
    list: &EdgeList,
    directed: bool,
    source: u32,
    format: OutputFormat,
) -> CliResult<()> {
    let graph = list.weighted(directed)?;
    let result = bellman_ford(&graph, NodeId(source))?;

    if format == OutputFormat::Json {
        return print_json(&json_report(source, &result));
    }

    if let Some(cycle) = result.negative_cycle() {
        println!(
            "{} Negative cycle reachable from {}",
            "⚠".yellow(),
            source.to_string().bright_white()
        );
        let mut closed = cycle.to_vec();
        closed.extend(cycle.first().copied());
        println!("  {}", format_path(&closed).bright_red());
        return Ok(());
    }

    let Some(paths) = result.paths() else {
        return Ok(());
    };
    print_heading(&format!("Shortest paths from {source}"));
    for n in (0..graph.num_nodes() as u32).map(NodeId) {
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
    println!();
    println!("  {} relaxation pass(es)", result.passes());

    Ok(())
}

fn json_report(source: u32, result: &BellmanFordResult<i128>) -> Value {
    let distances: Option<Vec<Value>> = result.paths().map(|paths| {
        (0..paths.len())
            .map(|n| paths.distance(NodeId::from(n)).map_or(Value::Null, sum_json))
            .collect()
    });
    json!({
        "source": source,
        "has_negative_cycle": result.has_negative_cycle(),
        "negative_cycle": result.negative_cycle(),
        "distances": distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(list: &EdgeList, directed: bool, source: u32) -> Value {
        let graph = list.weighted(directed).unwrap();
        json_report(source, &bellman_ford(&graph, NodeId(source)).unwrap())
    }

    #[test]
    fn test_bellman_ford_text_and_json() {
        let list = EdgeList::parse("4\n0 1 4\n0 2 5\n2 1 -3\n1 3 2\n").unwrap();
        assert!(execute(&list, true, 0, OutputFormat::Text).is_ok());
        assert!(execute(&list, true, 0, OutputFormat::Json).is_ok());

        let doc = report(&list, true, 0);
        assert_eq!(doc["has_negative_cycle"], false);
        assert_eq!(doc["distances"], json!([0, 2, 5, 4]));
    }

    #[test]
    fn test_negative_cycle_is_reported_not_failed() {
        let list = EdgeList::parse("2\n0 1 1\n1 0 -2\n").unwrap();
        assert!(execute(&list, true, 0, OutputFormat::Text).is_ok());
        assert!(execute(&list, true, 0, OutputFormat::Json).is_ok());

        let doc = report(&list, true, 0);
        assert_eq!(doc["has_negative_cycle"], true);
        assert_eq!(doc["negative_cycle"].as_array().map(Vec::len), Some(2));
        assert!(doc["distances"].is_null());
    }

    #[test]
    fn test_distances_beyond_i64() {
        let list =
            EdgeList::parse("3\n0 1 -9223372036854775808\n1 2 -9223372036854775808\n").unwrap();
        assert!(execute(&list, true, 0, OutputFormat::Json).is_ok());
        assert!(execute(&list, true, 0, OutputFormat::Text).is_ok());

        let doc = report(&list, true, 0);
        assert_eq!(doc["distances"][1], i64::MIN);
        assert_eq!(doc["distances"][2], "-18446744073709551616");
    }

    #[test]
    fn test_unreachable_node_is_null() {
        let list = EdgeList::parse("3\n0 1 -1\n").unwrap();
        let doc = report(&list, true, 0);
        assert_eq!(doc["distances"][1], -1);
        assert!(doc["distances"][2].is_null());
    }
}
