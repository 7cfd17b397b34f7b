//! Criterion benchmarks for mazegraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use mazegraph::graph::{Graph, GraphBuilder};
use mazegraph::set::OrderedSet;

/// Open grid maze with `side * side` cells.
fn make_grid(side: usize) -> Graph<usize> {
    let mut builder = GraphBuilder::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let cell = row * side + col;
            if col + 1 < side {
                builder.passage(cell, cell + 1);
            }
            if row + 1 < side {
                builder.passage(cell, cell + side);
            }
        }
    }
    builder.build().unwrap()
}

/// Random directed graph.
fn make_random_graph(node_count: usize, edges_per_node: usize) -> Graph<usize> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(node_count);
    for from in 0..node_count {
        for _ in 0..edges_per_node {
            let to = rng.gen_range(0..node_count);
            graph.add(&from, to).unwrap();
        }
    }
    graph
}

fn random_set(len: usize) -> OrderedSet<u32> {
    let mut rng = rand::thread_rng();
    let mut set = OrderedSet::new();
    while set.len() < len {
        set.insert(rng.gen_range(0..(len as u32) * 4)).unwrap();
    }
    set
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("set_insert_10k_random", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let mut set = OrderedSet::new();
            for _ in 0..10_000 {
                let _ = set.insert(rng.gen_range(0..1_000_000u32));
            }
            set
        })
    });
}

fn bench_set_algebra(c: &mut Criterion) {
    let left = random_set(10_000);
    let right = random_set(10_000);

    c.bench_function("set_union_10k", |b| b.iter(|| left.union(&right)));
    c.bench_function("set_intersection_10k", |b| {
        b.iter(|| left.intersection(&right))
    });
    c.bench_function("set_difference_10k", |b| b.iter(|| left.difference(&right)));
}

fn bench_grid_path(c: &mut Criterion) {
    let graph = make_grid(300);

    c.bench_function("bfs_grid_300x300_corner_to_corner", |b| {
        b.iter(|| graph.find_default_path())
    });
}

fn bench_random_path(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 3);

    c.bench_function("bfs_random_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let start = rng.gen_range(0..100_000usize);
            let end = rng.gen_range(0..100_000usize);
            let _ = graph.find_path(&start, &end);
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_set_algebra,
    bench_grid_path,
    bench_random_path,
);
criterion_main!(benches);
