use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattice::{bellman_ford, bfs, dijkstra, kruskal, prim, DenseGraph, SaturatingAlgebra};

/// A deterministic pseudo-random dense-ish graph.
fn build_graph(n: usize) -> DenseGraph<(), u64> {
    let mut g = DenseGraph::with_capacity(n);
    for _ in 0..n {
        g.insert_vertex(());
    }
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if state % 4 == 0 {
                g.insert_edge(u, v, state % 1000);
            }
        }
    }
    g
}

fn bench_algorithms(c: &mut Criterion) {
    let g = build_graph(300);
    let alg = SaturatingAlgebra::<u64>::new();

    c.bench_function("bfs_300", |b| {
        b.iter(|| black_box(bfs(&g, 0, None)));
    });

    c.bench_function("dijkstra_300", |b| {
        b.iter(|| black_box(dijkstra(&g, &alg, 0, None)));
    });

    c.bench_function("bellman_ford_300", |b| {
        b.iter(|| black_box(bellman_ford(&g, &alg, 0).expect("non-negative weights")));
    });

    c.bench_function("prim_300", |b| {
        b.iter(|| black_box(prim(&g, &alg, 0)));
    });

    c.bench_function("kruskal_300", |b| {
        b.iter(|| black_box(kruskal(&g, &alg)));
    });
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
