//! CLI entry point for the `mazegraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use mazegraph::cli::commands::{self, SetOp};
use mazegraph::cli::input::parse_vertex_count;
use mazegraph::GraphError;

#[derive(Parser)]
#[command(
    name = "mazegraph",
    about = "mazegraph CLI: shortest paths over ordered adjacency sets"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two vertices
    Path {
        /// Number of vertices
        #[arg(long, value_parser = parse_vertex_count)]
        vertices: usize,
        /// Directed edges, e.g. "0-1,1-2"
        #[arg(long, default_value = "")]
        edges: String,
        /// Start vertex (default: 0)
        #[arg(long)]
        from: Option<usize>,
        /// End vertex (default: last vertex)
        #[arg(long)]
        to: Option<usize>,
        /// Print the path from destination back to source
        #[arg(long)]
        destination_first: bool,
    },
    /// List the out-neighbours of a vertex
    Edges {
        /// Number of vertices
        #[arg(long, value_parser = parse_vertex_count)]
        vertices: usize,
        /// Directed edges, e.g. "0-1,1-2"
        #[arg(long, default_value = "")]
        edges: String,
        /// Vertex to inspect
        #[arg(long)]
        from: usize,
    },
    /// Combine two sets of indices
    Sets {
        /// Left operand, e.g. "1,2,3"
        #[arg(long, default_value = "")]
        left: String,
        /// Right operand
        #[arg(long, default_value = "")]
        right: String,
        /// Operation: union, intersection, difference
        #[arg(long, default_value = "union")]
        op: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let result = match cli.command {
        Commands::Path {
            vertices,
            edges,
            from,
            to,
            destination_first,
        } => commands::cmd_path(vertices, &edges, from, to, destination_first, json),
        Commands::Edges {
            vertices,
            edges,
            from,
        } => commands::cmd_edges(vertices, &edges, from, json),
        Commands::Sets { left, right, op } => {
            let op = match SetOp::from_name(&op) {
                Some(op) => op,
                None => {
                    eprintln!("Invalid set operation: {}", op);
                    process::exit(3);
                }
            };
            commands::cmd_sets(&left, &right, op, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeList(_) => 3,
            GraphError::InvalidIndex { .. } => 4,
            GraphError::NoPath { .. } => 5,
            GraphError::AllocationFailure { .. } | GraphError::EmptyIteratorAccess { .. } => 6,
        };
        process::exit(code);
    }
}
