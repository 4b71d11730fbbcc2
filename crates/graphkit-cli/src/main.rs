//! graphkit CLI - Run graph algorithms over edge-list files.
//!
//! # Commands
//!
//! - `graphkit mst` - Minimum spanning tree / forest (Kruskal)
//! - `graphkit dijkstra --source N` - Shortest paths, non-negative weights
//! - `graphkit bellman-ford --source N` - Shortest paths, negative-cycle detection
//! - `graphkit scc` - Strongly connected components (Kosaraju)
//! - `graphkit bridges` - Bridges and articulation points (Tarjan)
//! - `graphkit bfs --source N` - BFS levels and DFS preorder
//! - `graphkit components` - Connected components and cycle check
//!
//! # Examples
//!
//! ```bash
//! # Minimum spanning tree of an undirected graph
//! graphkit mst --input roads.txt
//!
//! # Shortest paths in a directed graph, as JSON
//! graphkit --directed --format json dijkstra --source 0 < flights.txt
//!
//! # Negative cycle check
//! graphkit --directed bellman-ford --source 0 --input arbitrage.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;

use commands::{bellman_ford, bfs, bridges, components, dijkstra, mst, scc, OutputFormat};
use error::CliResult;
use input::EdgeList;

/// graphkit - union-find, spanning trees, shortest paths, SCC and bridges
#[derive(Parser)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Treat edges as directed arcs
    #[arg(short, long, global = true)]
    directed: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Edge-list file (default: stdin)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum spanning tree (forest if disconnected)
    Mst,

    /// Shortest paths from a source (non-negative weights)
    Dijkstra {
        /// Source node
        #[arg(short, long)]
        source: u32,

        /// Stop once this node is settled and report only it
        #[arg(short, long)]
        target: Option<u32>,
    },

    /// Shortest paths from a source with negative weights
    BellmanFord {
        /// Source node
        #[arg(short, long)]
        source: u32,
    },

    /// Strongly connected components
    Scc,

    /// Bridges and articulation points (undirected graphs)
    Bridges,

    /// BFS levels and DFS preorder from a source
    Bfs {
        /// Source node
        #[arg(short, long)]
        source: u32,
    },

    /// Connected components and cycle check (edges treated as undirected)
    Components,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    if let Commands::Completions { shell } = cli.command {
        use clap::CommandFactory;
        clap_complete::generate(shell, &mut Cli::command(), "graphkit", &mut std::io::stdout());
        return Ok(());
    }

    let list = EdgeList::read(cli.input.as_deref())?;
    let (directed, format) = (cli.directed, cli.format);

    match cli.command {
        Commands::Mst => mst::execute(&list, directed, format),
        Commands::Dijkstra { source, target } => {
            dijkstra::execute(&list, directed, source, target, format)
        }
        Commands::BellmanFord { source } => bellman_ford::execute(&list, directed, source, format),
        Commands::Scc => scc::execute(&list, directed, format),
        Commands::Bridges => bridges::execute(&list, directed, format),
        Commands::Bfs { source } => bfs::execute(&list, directed, source, format),
        Commands::Components => components::execute(&list, format),
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
