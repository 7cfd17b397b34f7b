//! Parsing of the edge and element lists given on the command line.

use crate::types::{GraphError, GraphResult};

/// Parse `"0-1, 1-2"` into directed edges. An empty string has no edges.
pub fn parse_edge_list(text: &str) -> GraphResult<Vec<(usize, usize)>> {
    let mut edges = Vec::new();
    for item in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (from, to) = item.split_once('-').ok_or_else(|| {
            GraphError::InvalidEdgeList(format!("expected FROM-TO, got {:?}", item))
        })?;
        edges.push((parse_index(from)?, parse_index(to)?));
    }
    Ok(edges)
}

/// Parse `"1,2,3"` into indices. An empty string is an empty list.
pub fn parse_index_list(text: &str) -> GraphResult<Vec<usize>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_index)
        .collect()
}

/// Parse a vertex count for clap; zero is rejected.
pub fn parse_vertex_count(text: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(0) => Err("a graph needs at least one vertex".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("invalid vertex count {:?}: {}", text, e)),
    }
}

fn parse_index(text: &str) -> GraphResult<usize> {
    let text = text.trim();
    text.parse()
        .map_err(|_| GraphError::InvalidEdgeList(format!("invalid vertex index {:?}", text)))
}
