//! CLI command implementations.

use serde::Serialize;

use crate::graph::{Graph, GraphBuilder};
use crate::set::OrderedSet;
use crate::types::{GraphError, GraphResult};

use super::input::{parse_edge_list, parse_index_list};

/// Set operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Intersection,
    Difference,
}

impl SetOp {
    /// Parse an operation name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "union" | "or" => Some(SetOp::Union),
            "intersection" | "and" => Some(SetOp::Intersection),
            "difference" | "minus" => Some(SetOp::Difference),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            SetOp::Union => "union",
            SetOp::Intersection => "intersection",
            SetOp::Difference => "difference",
        }
    }
}

#[derive(Serialize)]
struct PathReport<'a> {
    from: usize,
    to: usize,
    order: &'static str,
    edges: usize,
    vertices: &'a [usize],
}

/// Build a graph from a vertex count and an edge list.
///
/// A zero vertex count is [`GraphError::InvalidIndex`] for vertex 0.
pub fn build_graph(vertices: usize, edges: &str) -> GraphResult<Graph<usize>> {
    if vertices == 0 {
        return Err(GraphError::InvalidIndex { index: 0, size: 0 });
    }
    let mut builder = GraphBuilder::new(vertices);
    builder.edges(parse_edge_list(edges)?);
    builder.build()
}

/// Print the shortest path between two vertices.
pub fn cmd_path(
    vertices: usize,
    edges: &str,
    from: Option<usize>,
    to: Option<usize>,
    destination_first: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = build_graph(vertices, edges)?;
    let from = from.unwrap_or(0);
    let to = to.unwrap_or(graph.size() - 1);

    let path = graph.find_path(&from, &to)?;
    let edge_count = path.edge_count();
    let (order, sequence) = if destination_first {
        ("destination-first", path.destination_first())
    } else {
        ("source-first", path.into_vec())
    };

    if json {
        let report = PathReport {
            from,
            to,
            order,
            edges: edge_count,
            vertices: &sequence,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Path {} -> {} ({} edges, {}):", from, to, edge_count, order);
        println!("  {}", join(&sequence, " -> "));
    }
    Ok(())
}

/// Print the out-neighbours of a vertex.
pub fn cmd_edges(vertices: usize, edges: &str, from: usize, json: bool) -> GraphResult<()> {
    let graph = build_graph(vertices, edges)?;
    let neighbors: Vec<usize> = graph.neighbors(&from)?.iter().copied().collect();

    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": from, "degree": neighbors.len(), "neighbors": neighbors})
        );
    } else {
        println!("Vertex {} ({} out-edges)", from, neighbors.len());
        if !neighbors.is_empty() {
            println!("  -> {}", join(&neighbors, ", "));
        }
    }
    Ok(())
}

/// Print the result of a set operation over two index lists.
pub fn cmd_sets(left: &str, right: &str, op: SetOp, json: bool) -> GraphResult<()> {
    let left = OrderedSet::try_from_iter(parse_index_list(left)?)?;
    let right = OrderedSet::try_from_iter(parse_index_list(right)?)?;

    let result = match op {
        SetOp::Union => left.union(&right)?,
        SetOp::Intersection => left.intersection(&right)?,
        SetOp::Difference => left.difference(&right)?,
    };
    let items: Vec<usize> = result.into_iter().collect();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "op": op.name(),
                "left": left.as_slice(),
                "right": right.as_slice(),
                "result": items,
            })
        );
    } else {
        println!("{} = {{{}}}", op.name(), join(&items, ", "));
    }
    Ok(())
}

fn join(items: &[usize], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
