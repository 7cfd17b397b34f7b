//! Breadth-first shortest-path search.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, Vertex};

use super::{Graph, Path};

/// Shortest path by edge count from `start` to `end` (unweighted BFS).
///
/// Each discovered vertex records its distance and the vertex it was reached
/// from. The search stops as soon as `end` is discovered, and the path is
/// rebuilt by walking predecessors back from `end`. Returns the path source
/// first; a path from a vertex to itself is that single vertex.
pub fn shortest_path<V: Vertex>(graph: &Graph<V>, start: &V, end: &V) -> GraphResult<Path<V>> {
    let source = graph.check_index(start)?;
    let target = graph.check_index(end)?;

    if source == target {
        return Ok(Path::from_vertices(vec![start.clone()]));
    }

    let size = graph.size();
    let mut distance: Vec<Option<u32>> = vec![None; size];
    let mut predecessor: Vec<Option<V>> = vec![None; size];
    let mut queue: VecDeque<(V, u32)> = VecDeque::new();

    log::debug!("bfs from {} to {} over {} vertices", source, target, size);

    distance[source] = Some(0);
    queue.push_back((start.clone(), 0));

    'search: while let Some((current, depth)) = queue.pop_front() {
        log::trace!("expanding vertex {} at depth {}", current.index(), depth);

        for neighbor in graph.neighbors(&current)? {
            let slot = graph.check_index(neighbor)?;
            if distance[slot].is_some() {
                continue;
            }

            distance[slot] = Some(depth + 1);
            predecessor[slot] = Some(current.clone());

            if slot == target {
                break 'search;
            }
            queue.push_back((neighbor.clone(), depth + 1));
        }
    }

    let Some(hops) = distance[target] else {
        log::debug!("no path from {} to {}", source, target);
        return Err(GraphError::NoPath {
            from: source,
            to: target,
        });
    };

    let path = reconstruct_path(&predecessor, end, hops, source, target)?;
    log::debug!("found path of {} edges from {} to {}", hops, source, target);
    Ok(path)
}

/// Walk predecessors from `end` back to the source.
fn reconstruct_path<V: Vertex>(
    predecessor: &[Option<V>],
    end: &V,
    hops: u32,
    source: usize,
    target: usize,
) -> GraphResult<Path<V>> {
    let mut vertices = Vec::with_capacity(hops as usize + 1);
    let mut current = end.clone();

    for _ in 0..hops {
        let parent = predecessor[current.index()]
            .clone()
            .ok_or(GraphError::NoPath {
                from: source,
                to: target,
            })?;
        vertices.push(current);
        current = parent;
    }

    debug_assert_eq!(current.index(), source);
    vertices.push(current);
    vertices.reverse();
    Ok(Path::from_vertices(vertices))
}
