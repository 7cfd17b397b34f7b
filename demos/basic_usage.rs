//! Basic build -> query -> solve flow.

use mazegraph::*;

fn main() -> GraphResult<()> {
    // A 2x3 maze:
    //   0 1 2
    //   3 4 5
    let mut builder = GraphBuilder::new(6);
    builder
        .passage(0usize, 1)
        .passage(1, 4)
        .passage(4, 3)
        .passage(4, 5)
        .passage(5, 2);
    let graph = builder.build()?;

    println!(
        "Maze created with {} cells and {} edges",
        graph.size(),
        graph.edge_count()
    );

    println!("Cell 4 opens onto {:?}", graph.neighbors(&4)?);
    println!("0 -> 3 open: {}", graph.is_edge(&0, &3)?);

    let path = graph.find_default_path()?;
    println!("Shortest path ({} steps): {:?}", path.edge_count(), path.vertices());

    // Set algebra over adjacency sets
    let a = graph.find_edges(&1)?;
    let b = graph.find_edges(&5)?;
    println!("N(1) | N(5) = {:?}", a.union(&b)?);
    println!("N(1) & N(5) = {:?}", a.intersection(&b)?);

    // A wall that cuts the maze in two
    let mut walled: Graph<usize> = Graph::new(6);
    walled.add(&0, 1)?;
    match walled.find_default_path() {
        Err(GraphError::NoPath { from, to }) => println!("No way from {} to {}", from, to),
        other => println!("Unexpected: {:?}", other),
    }

    Ok(())
}
