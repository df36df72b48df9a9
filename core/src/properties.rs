//! Structural predicates over a [`Graph`].
//!
//! Most are single passes over vertex degrees. Connectivity and the
//! Eulerian checks lean on [`ConnectedComponents`]; bipartiteness is a BFS
//! two-colouring.

use std::collections::VecDeque;

use serde::Serialize;

use crate::components::ConnectedComponents;
use crate::graph::{Graph, Vertex};

fn degrees(graph: &Graph) -> impl Iterator<Item = usize> + '_ {
    graph.vertices().map(move |v| graph.adj(v).len())
}

/// Every vertex is adjacent to all `V - 1` others. Parallel edges and
/// self-loops do not count toward it.
pub fn is_complete(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    // stamp[w] == v + 1 marks w as already seen from v
    let mut stamp = vec![0usize; n];

    graph.vertices().all(|v| {
        let mut distinct = 0;
        for edge in graph.adj(v) {
            if edge.w != v && stamp[edge.w] != v + 1 {
                stamp[edge.w] = v + 1;
                distinct += 1;
            }
        }
        distinct == target
    })
}

/// All vertices share one degree. Vacuously true for the empty graph.
pub fn is_regular(graph: &Graph) -> bool {
    let mut iter = degrees(graph);
    match iter.next() {
        Some(first) => iter.all(|d| d == first),
        None => true,
    }
}

/// At most one connected component.
pub fn is_connected(graph: &Graph) -> bool {
    ConnectedComponents::new(graph).count() <= 1
}

/// Every edge lies in a single component; isolated vertices are ignored.
fn edges_connected(graph: &Graph, cc: &ConnectedComponents<'_>) -> bool {
    let mut seen: Option<usize> = None;

    for (v, &c) in cc.ids().iter().enumerate() {
        if graph.adj(v).is_empty() {
            continue;
        }
        match seen {
            None => seen = Some(c),
            Some(s) if s != c => return false,
            Some(_) => {}
        }
    }
    true
}

fn odd_degree_count(graph: &Graph) -> usize {
    degrees(graph).filter(|d| d % 2 == 1).count()
}

fn eulerian_circuit_with(graph: &Graph, cc: &ConnectedComponents<'_>) -> bool {
    odd_degree_count(graph) == 0 && edges_connected(graph, cc)
}

fn eulerian_path_with(graph: &Graph, cc: &ConnectedComponents<'_>) -> bool {
    matches!(odd_degree_count(graph), 0 | 2) && edges_connected(graph, cc)
}

/// A closed walk uses every edge exactly once.
pub fn has_eulerian_circuit(graph: &Graph) -> bool {
    eulerian_circuit_with(graph, &ConnectedComponents::new(graph))
}

/// A walk (open or closed) uses every edge exactly once.
pub fn has_eulerian_path(graph: &Graph) -> bool {
    eulerian_path_with(graph, &ConnectedComponents::new(graph))
}

/// Two-colouring of the vertices such that every edge joins different
/// colours, or `None` when an odd cycle (or a self-loop) rules one out.
///
/// Each component is coloured by BFS from its lowest vertex, which gets
/// `false`.
pub fn two_coloring(graph: &Graph) -> Option<Vec<bool>> {
    let n = graph.vertex_count();
    let mut color: Vec<Option<bool>> = vec![None; n];
    let mut queue: VecDeque<Vertex> = VecDeque::new();

    for seed in graph.vertices() {
        if color[seed].is_some() {
            continue;
        }
        color[seed] = Some(false);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            let side = color[current]?;
            for edge in graph.adj(current) {
                match color[edge.w] {
                    None => {
                        color[edge.w] = Some(!side);
                        queue.push_back(edge.w);
                    }
                    Some(c) if c == side => return None,
                    Some(_) => {}
                }
            }
        }
    }

    color.into_iter().collect()
}

pub fn is_bipartite(graph: &Graph) -> bool {
    two_coloring(graph).is_some()
}

/// All predicates evaluated once, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Properties {
    pub complete: bool,
    pub regular: bool,
    pub connected: bool,
    pub eulerian_circuit: bool,
    pub eulerian_path: bool,
    pub bipartite: bool,
}

impl Properties {
    /// Labels components once and shares them between the connectivity and
    /// Eulerian checks.
    pub fn of(graph: &Graph) -> Self {
        let cc = ConnectedComponents::new(graph);
        Self::with_components(graph, &cc)
    }

    /// Same as [`Properties::of`], reusing a labeling the caller already has.
    pub fn with_components(graph: &Graph, cc: &ConnectedComponents<'_>) -> Self {
        Self {
            complete: is_complete(graph),
            regular: is_regular(graph),
            connected: cc.count() <= 1,
            eulerian_circuit: eulerian_circuit_with(graph, cc),
            eulerian_path: eulerian_path_with(graph, cc),
            bipartite: is_bipartite(graph),
        }
    }
}
