//! Large grid maze performance demo.

use std::time::Instant;

use mazegraph::*;

fn main() -> GraphResult<()> {
    let side = 1_000;
    let cells = side * side;

    println!("Creating {}x{} grid maze...", side, side);
    let start = Instant::now();

    // Carve a serpentine maze: every row is open, rows connect at alternating ends.
    let mut builder = GraphBuilder::new(cells);
    for row in 0..side {
        for col in 0..side - 1 {
            let cell = row * side + col;
            builder.passage(cell, cell + 1);
        }
        if row + 1 < side {
            let col = if row % 2 == 0 { side - 1 } else { 0 };
            builder.passage(row * side + col, (row + 1) * side + col);
        }
    }
    let graph: Graph<usize> = builder.build()?;
    println!(
        "  Graph built in {:?} ({} cells, {} edges)",
        start.elapsed(),
        graph.size(),
        graph.edge_count()
    );

    let start = Instant::now();
    let path = graph.find_default_path()?;
    println!(
        "  Solved in {:?}: {} steps from {:?} to {:?}",
        start.elapsed(),
        path.edge_count(),
        path.source(),
        path.destination()
    );

    let start = Instant::now();
    let copy = graph.clone();
    println!("  Deep copy in {:?} (equal: {})", start.elapsed(), copy == graph);

    Ok(())
}
