use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattice::DenseGraph;

fn bench_vertex_churn(c: &mut Criterion) {
    let size = 500;

    c.bench_function("dense_graph_insert_vertices", |b| {
        b.iter(|| {
            let mut g: DenseGraph<usize, u32> = DenseGraph::new();
            for i in 0..size {
                g.insert_vertex(i);
            }
            black_box(g.len())
        });
    });

    c.bench_function("dense_graph_remove_middle", |b| {
        b.iter(|| {
            let mut g: DenseGraph<usize, u32> = DenseGraph::with_capacity(size);
            for i in 0..size {
                g.insert_vertex(i);
            }
            // Chain: 0->1->...->N
            for i in 0..size - 1 {
                g.insert_edge(i, i + 1, 1);
            }
            black_box(g.remove_vertex(size / 2))
        });
    });
}

fn bench_edge_ops(c: &mut Criterion) {
    let size = 200;
    let mut g: DenseGraph<usize, u32> = DenseGraph::with_capacity(size);
    for i in 0..size {
        g.insert_vertex(i);
    }
    for i in 0..size {
        for j in 0..size {
            if (i + j) % 3 == 0 {
                g.insert_edge(i, j, (i + j) as u32);
            }
        }
    }

    c.bench_function("dense_graph_edge_lookup", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for i in 0..size {
                for j in 0..size {
                    if g.contains_edge(black_box(i), black_box(j)) {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        });
    });

    c.bench_function("dense_graph_neighbor_scan", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for u in 0..size {
                for (_, &w) in g.neighbors(u) {
                    total += u64::from(w);
                }
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_vertex_churn, bench_edge_ops);
criterion_main!(benches);
