//! Property tests pitting the algorithm suite against brute-force and
//! external oracles on small random graphs.

use lattice::{astar, bellman_ford, dijkstra, kruskal, prim, CostAlgebra, DenseGraph, SaturatingAlgebra};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

const ALG: SaturatingAlgebra<u64> = SaturatingAlgebra::new();

/// A random directed graph of 2..=8 vertices with non-negative weights,
/// encoded as a flat row-major adjacency of optional weights.
fn small_graph() -> impl Strategy<Value = DenseGraph<(), u64>> {
    (2usize..=8)
        .prop_flat_map(|n| {
            proptest::collection::vec(proptest::option::of(0u64..100), n * n)
                .prop_map(move |cells| (n, cells))
        })
        .prop_map(|(n, cells)| {
            let mut g = DenseGraph::new();
            for _ in 0..n {
                g.insert_vertex(());
            }
            for (idx, cell) in cells.into_iter().enumerate() {
                let (u, v) = (idx / n, idx % n);
                if u != v {
                    if let Some(w) = cell {
                        g.insert_edge(u, v, w);
                    }
                }
            }
            g
        })
}

/// Exhaustive shortest-path distances by depth-first enumeration of simple
/// paths. Exponential, usable only because the graphs are tiny.
fn brute_force_distances(g: &DenseGraph<(), u64>, start: usize) -> Vec<Option<u64>> {
    fn walk(
        g: &DenseGraph<(), u64>,
        u: usize,
        acc: u64,
        on_path: &mut Vec<bool>,
        best: &mut [Option<u64>],
    ) {
        if best[u].map_or(true, |b| acc < b) {
            best[u] = Some(acc);
        }
        on_path[u] = true;
        for (v, &w) in g.neighbors(u) {
            if !on_path[v] {
                walk(g, v, acc + w, on_path, best);
            }
        }
        on_path[u] = false;
    }

    let mut best = vec![None; g.len()];
    let mut on_path = vec![false; g.len()];
    walk(g, start, 0, &mut on_path, &mut best);
    best
}

proptest! {
    #[test]
    fn dijkstra_matches_brute_force(g in small_graph()) {
        let tree = dijkstra(&g, &ALG, 0, None);
        let oracle = brute_force_distances(&g, 0);
        for v in 0..g.len() {
            let expected = oracle[v].unwrap_or(u64::MAX);
            prop_assert_eq!(*tree.cost(v), expected, "vertex {}", v);
            // Reached vertices must have a valid predecessor chain.
            if oracle[v].is_some() {
                prop_assert!(tree.reached(v));
                let path: Vec<_> = tree.path_to(v).collect();
                prop_assert_eq!(path.last().copied(), Some(0));
            }
        }
    }

    #[test]
    fn bellman_ford_agrees_with_dijkstra(g in small_graph()) {
        let dij = dijkstra(&g, &ALG, 0, None);
        let bf = bellman_ford(&g, &ALG, 0).expect("non-negative weights");
        for v in 0..g.len() {
            prop_assert_eq!(dij.cost(v), bf.cost(v), "vertex {}", v);
        }
    }

    #[test]
    fn astar_zero_heuristic_equals_dijkstra(g in small_graph(), end_seed: usize) {
        let end = end_seed % g.len();
        let dij = dijkstra(&g, &ALG, 0, Some(end));
        let ast = astar(&g, &ALG, 0, end, |_| 0u64, |c, h| ALG.add(c, h));
        prop_assert_eq!(dij.cost(end), ast.cost(end));
    }

    #[test]
    fn dijkstra_matches_petgraph(g in small_graph()) {
        let mut oracle = petgraph::Graph::<(), u64>::new();
        let nodes: Vec<_> = (0..g.len()).map(|_| oracle.add_node(())).collect();
        for (u, v, &w) in g.edges() {
            oracle.add_edge(nodes[u], nodes[v], w);
        }
        let dist = petgraph::algo::dijkstra(&oracle, nodes[0], None, |e| *e.weight());

        let tree = dijkstra(&g, &ALG, 0, None);
        for v in 0..g.len() {
            let expected = dist.get(&nodes[v]).copied().unwrap_or(u64::MAX);
            prop_assert_eq!(*tree.cost(v), expected, "vertex {}", v);
        }
    }
}

/// A random *undirected* connected graph with distinct weights: a spanning
/// path guarantees connectivity, extra edges come from the seed mask.
fn connected_undirected() -> impl Strategy<Value = DenseGraph<(), u64>> {
    (3usize..=8, any::<u64>()).prop_map(|(n, mask)| {
        let mut g = DenseGraph::new();
        for _ in 0..n {
            g.insert_vertex(());
        }
        // Distinct weights make the MST unique, so Prim and Kruskal must
        // agree exactly on total weight.
        let mut weight = 1u64;
        for i in 0..n - 1 {
            g.insert_edge(i, i + 1, weight);
            g.insert_edge(i + 1, i, weight);
            weight += 1;
        }
        let mut bit = 0;
        for u in 0..n {
            for v in u + 2..n {
                if (mask >> (bit % 64)) & 1 == 1 {
                    g.insert_edge(u, v, weight);
                    g.insert_edge(v, u, weight);
                    weight += 1;
                }
                bit += 1;
            }
        }
        g
    })
}

fn spanning_weight(tree: &lattice::SearchTree<u64>) -> u64 {
    (0..tree.len())
        .filter(|&v| tree.previous(v).is_some())
        .map(|v| *tree.cost(v))
        .sum()
}

proptest! {
    #[test]
    fn prim_and_kruskal_agree_on_weight(g in connected_undirected()) {
        let p = prim(&g, &ALG, 0);
        let k = kruskal(&g, &ALG);

        // Connected input: Prim reaches everything.
        for v in 0..g.len() {
            prop_assert!(p.reached(v), "prim missed vertex {}", v);
        }
        prop_assert_eq!(spanning_weight(&p), spanning_weight(&k));

        // A spanning tree over n vertices has n - 1 edges.
        let kruskal_edges = (0..k.len()).filter(|&v| k.previous(v).is_some()).count();
        prop_assert_eq!(kruskal_edges, g.len() - 1);
    }
}
