use std::collections::HashSet;

use proptest::prelude::*;
use undigraph_core::{
    BreadthFirstPaths, ConnectedComponents, DepthFirstPaths, Graph, Paths, Vertex,
};

fn graph_strategy(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    (1..=max_vertices).prop_flat_map(move |n| {
        proptest::collection::vec((0..n, 0..n), 0..=max_edges)
            .prop_map(move |edges| Graph::from_edge_list(n, edges).unwrap())
    })
}

fn loop_free_graph_strategy(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    (2..=max_vertices).prop_flat_map(move |n| {
        proptest::collection::vec((0..n, 0..n), 0..=max_edges).prop_map(move |edges| {
            Graph::from_edge_list(n, edges.into_iter().filter(|(v, w)| v != w)).unwrap()
        })
    })
}

fn is_edge(g: &Graph, v: Vertex, w: Vertex) -> bool {
    g.neighbors(v).unwrap().iter().any(|e| e.w == w)
}

/// Length of the shortest simple path from `s` to `t`, found by trying them all.
fn shortest_by_enumeration(g: &Graph, s: Vertex, t: Vertex) -> Option<usize> {
    fn walk(
        g: &Graph,
        current: Vertex,
        t: Vertex,
        on_path: &mut Vec<bool>,
        depth: usize,
        best: &mut Option<usize>,
    ) {
        if current == t {
            *best = Some(best.map_or(depth, |b| b.min(depth)));
            return;
        }
        for e in g.neighbors(current).unwrap() {
            if !on_path[e.w] {
                on_path[e.w] = true;
                walk(g, e.w, t, on_path, depth + 1, best);
                on_path[e.w] = false;
            }
        }
    }

    let mut on_path = vec![false; g.vertex_count()];
    on_path[s] = true;
    let mut best = None;
    walk(g, s, t, &mut on_path, 0, &mut best);
    best
}

fn check_paths(g: &Graph, engine: &dyn Paths) -> Result<(), TestCaseError> {
    let s = engine.source();
    for v in g.vertices() {
        let path = engine.path_to(v).unwrap();
        if !engine.has_path_to(v).unwrap() {
            prop_assert!(path.is_empty());
            continue;
        }
        prop_assert_eq!(path.first().copied(), Some(s));
        prop_assert_eq!(path.last().copied(), Some(v));
        for pair in path.windows(2) {
            prop_assert!(is_edge(g, pair[0], pair[1]));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_every_vertex_in_one_component(g in graph_strategy(12, 20)) {
        let cc = ConnectedComponents::new(&g);
        let members = cc.components();
        let total: usize = members.iter().map(|m| m.len()).sum();
        prop_assert_eq!(total, g.vertex_count());
        for v in g.vertices() {
            prop_assert!(cc.are_connected(v, v).unwrap());
            prop_assert!(cc.component_of(v).unwrap() < cc.count());
        }
    }

    #[test]
    fn prop_components_match_reachability(g in graph_strategy(10, 14)) {
        let cc = ConnectedComponents::new(&g);
        for s in g.vertices() {
            let bfs = BreadthFirstPaths::new(&g, s).unwrap();
            for v in g.vertices() {
                prop_assert_eq!(cc.are_connected(s, v).unwrap(), bfs.has_path_to(v).unwrap());
            }
        }
    }

    #[test]
    fn prop_component_ids_in_seed_order(g in graph_strategy(12, 12)) {
        let cc = ConnectedComponents::new(&g);
        let mut next_id = 0;
        for v in g.vertices() {
            let id = cc.component_of(v).unwrap();
            prop_assert!(id <= next_id);
            if id == next_id {
                next_id += 1;
            }
        }
        prop_assert_eq!(next_id, cc.count());
    }

    #[test]
    fn prop_dfs_paths_are_walks(g in graph_strategy(10, 16), seed in 0usize..10) {
        let s = seed % g.vertex_count();
        let dfs = DepthFirstPaths::new(&g, s).unwrap();
        check_paths(&g, &dfs)?;
    }

    #[test]
    fn prop_bfs_paths_are_walks(g in graph_strategy(10, 16), seed in 0usize..10) {
        let s = seed % g.vertex_count();
        let bfs = BreadthFirstPaths::new(&g, s).unwrap();
        check_paths(&g, &bfs)?;
    }

    #[test]
    fn prop_dfs_and_bfs_reach_same_set(g in graph_strategy(10, 16), seed in 0usize..10) {
        let s = seed % g.vertex_count();
        let dfs = DepthFirstPaths::new(&g, s).unwrap();
        let bfs = BreadthFirstPaths::new(&g, s).unwrap();
        prop_assert_eq!(dfs.reached_count(), bfs.reached_count());
        for v in g.vertices() {
            prop_assert_eq!(dfs.has_path_to(v).unwrap(), bfs.has_path_to(v).unwrap());
        }
    }

    #[test]
    fn prop_bfs_distance_minimal(g in graph_strategy(7, 10), seed in 0usize..7) {
        let s = seed % g.vertex_count();
        let bfs = BreadthFirstPaths::new(&g, s).unwrap();
        for v in g.vertices() {
            let expected = shortest_by_enumeration(&g, s, v);
            prop_assert_eq!(bfs.distance_to(v).unwrap(), expected);
            if let Some(d) = expected {
                prop_assert_eq!(bfs.path_to(v).unwrap().len(), d + 1);
            }
        }
    }

    #[test]
    fn prop_all_edges_once_each(g in loop_free_graph_strategy(10, 20)) {
        let edges = g.all_edges();
        prop_assert_eq!(edges.len(), g.edge_count());
        for e in &edges {
            prop_assert!(e.v < e.w);
        }
        let firsts: Vec<Vertex> = edges.iter().map(|e| e.v).collect();
        let mut sorted = firsts.clone();
        sorted.sort();
        prop_assert_eq!(firsts, sorted);
    }

    #[test]
    fn prop_degree_sum_is_twice_edges(g in graph_strategy(10, 20)) {
        let sum: usize = g.vertices().map(|v| g.degree(v).unwrap()).sum();
        prop_assert_eq!(sum, 2 * g.edge_count());
    }

    #[test]
    fn prop_traversals_idempotent(g in graph_strategy(10, 16), seed in 0usize..10) {
        let s = seed % g.vertex_count();
        let d1 = DepthFirstPaths::new(&g, s).unwrap();
        let d2 = DepthFirstPaths::new(&g, s).unwrap();
        prop_assert_eq!(d1.order(), d2.order());

        let b1 = BreadthFirstPaths::new(&g, s).unwrap();
        let b2 = BreadthFirstPaths::new(&g, s).unwrap();
        for v in g.vertices() {
            prop_assert_eq!(b1.path_to(v).unwrap(), b2.path_to(v).unwrap());
            prop_assert_eq!(b1.distance_to(v).unwrap(), b2.distance_to(v).unwrap());
        }

        let c1 = ConnectedComponents::new(&g);
        let c2 = ConnectedComponents::new(&g);
        prop_assert_eq!(c1.components(), c2.components());
    }

    #[test]
    fn prop_dfs_order_has_no_repeats(g in graph_strategy(12, 20), seed in 0usize..12) {
        let s = seed % g.vertex_count();
        let dfs = DepthFirstPaths::new(&g, s).unwrap();
        let unique: HashSet<Vertex> = dfs.order().iter().copied().collect();
        prop_assert_eq!(unique.len(), dfs.order().len());
        prop_assert_eq!(dfs.order()[0], s);
    }
}

// --- Fixed scenarios ---

#[test]
fn test_four_cycle_scenario() {
    let g = Graph::from_edge_list(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    assert!(g.vertices().all(|v| g.degree(v).unwrap() == 2));

    let bfs = BreadthFirstPaths::new(&g, 0).unwrap();
    let distances: Vec<Option<usize>> = g.vertices().map(|v| bfs.distance_to(v).unwrap()).collect();
    assert_eq!(distances, vec![Some(0), Some(1), Some(2), Some(1)]);

    assert_eq!(ConnectedComponents::new(&g).count(), 1);
    assert_eq!(DepthFirstPaths::new(&g, 0).unwrap().reached_count(), 4);
}

#[test]
fn test_two_pairs_and_isolated_scenario() {
    let g = Graph::from_edge_list(5, [(0, 1), (2, 3)]).unwrap();
    let cc = ConnectedComponents::new(&g);
    assert_eq!(cc.count(), 3);
    assert!(cc.are_connected(0, 1).unwrap());
    assert!(!cc.are_connected(0, 2).unwrap());
}

#[test]
fn test_empty_graph_scenario() {
    let g = Graph::new(0);
    assert_eq!(ConnectedComponents::new(&g).count(), 0);
    assert!(g.all_edges().is_empty());
}

#[test]
fn test_single_vertex_scenario() {
    let g = Graph::new(1);
    assert_eq!(ConnectedComponents::new(&g).count(), 1);
    assert!(DepthFirstPaths::new(&g, 0).unwrap().has_path_to(0).unwrap());
    assert!(BreadthFirstPaths::new(&g, 0).unwrap().has_path_to(0).unwrap());
}
