//! Criterion benchmarks for graphwalk.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphwalk::{DirectedGraph, FriendshipNetwork};

/// Build a random directed graph with `n` vertices and up to
/// `edges_per_vertex` out-edges each.
fn make_digraph(n: u64, edges_per_vertex: usize) -> DirectedGraph<u64> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = DirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v).unwrap();
    }
    for v in 0..n {
        for _ in 0..edges_per_vertex {
            let w = rng.gen_range(0..n);
            if w != v {
                // Duplicates collapse
                graph.add_edge(v, w).unwrap();
            }
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_digraph(10_000, 4);

    c.bench_function("bft_10k_vertices", |b| b.iter(|| graph.bft(&0).unwrap()));
    c.bench_function("dft_10k_vertices", |b| b.iter(|| graph.dft(&0).unwrap()));
    c.bench_function("bfs_10k_vertices", |b| {
        b.iter(|| graph.bfs(&0, &9_999).unwrap())
    });
}

fn bench_social(c: &mut Criterion) {
    let mut network = FriendshipNetwork::new();
    let mut rng = StdRng::seed_from_u64(7);
    network.populate(1_000, 5, &mut rng).unwrap();

    c.bench_function("all_shortest_paths_1k_users", |b| {
        b.iter(|| network.all_shortest_paths(1).unwrap())
    });
}

criterion_group!(benches, bench_traversal, bench_social);
criterion_main!(benches);
