use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Vertex};

/// Distance recorded for vertices BFS never reached.
pub const UNREACHED: usize = usize::MAX;

/// Reachability and path queries shared by the DFS and BFS engines.
pub trait Paths {
    /// Vertex the traversal started from.
    fn source(&self) -> Vertex;

    /// Whether `v` was reached from the source.
    fn has_path_to(&self, v: Vertex) -> Result<bool>;

    /// Vertices from the source to `v` inclusive, or empty when unreached.
    fn path_to(&self, v: Vertex) -> Result<Vec<Vertex>>;
}

/// Pre-order depth-first walk from `source` over vertices not yet `marked`.
///
/// Frames are `(vertex, next adjacency index)`, so each vertex resumes its
/// neighbor scan exactly where the recursive formulation would. `discover`
/// sees `(vertex, parent)` in discovery order; the source has no parent.
pub(crate) fn dfs_walk<F>(graph: &Graph, source: Vertex, marked: &mut [bool], mut discover: F)
where
    F: FnMut(Vertex, Option<Vertex>),
{
    marked[source] = true;
    discover(source, None);

    let mut stack: Vec<(Vertex, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        let Some(edge) = graph.adj(current).get(next) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        // Adjacency entries of `current` always have `v == current`.
        let w = edge.w;
        if !marked[w] {
            marked[w] = true;
            discover(w, Some(current));
            stack.push((w, 0));
        }
    }
}

/// Walk parent pointers from `v` back to `source`, returning the forward path.
fn reconstruct_path(edge_to: &[Vertex], source: Vertex, v: Vertex) -> Vec<Vertex> {
    let mut path = Vec::new();
    let mut current = v;

    while current != source {
        path.push(current);
        current = edge_to[current];
    }
    path.push(source);

    path.reverse();
    path
}

/// Depth-first search tree rooted at a single source.
///
/// Holds a shared borrow of the graph, so the graph cannot be mutated while
/// the result is alive.
#[derive(Debug)]
pub struct DepthFirstPaths<'g> {
    graph: &'g Graph,
    source: Vertex,
    marked: Vec<bool>,
    /// Parent of each reached vertex. Sentinel: unreached vertices (and the
    /// source) point at themselves.
    edge_to: Vec<Vertex>,
    order: Vec<Vertex>,
}

impl<'g> DepthFirstPaths<'g> {
    pub fn new(graph: &'g Graph, source: Vertex) -> Result<Self> {
        graph.check_vertex(source)?;

        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to: Vec<Vertex> = (0..n).collect();
        let mut order = Vec::new();

        dfs_walk(graph, source, &mut marked, |v, parent| {
            if let Some(p) = parent {
                edge_to[v] = p;
            }
            order.push(v);
        });

        debug!(source, reached = order.len(), "depth-first search complete");

        Ok(Self {
            graph,
            source,
            marked,
            edge_to,
            order,
        })
    }

    /// Number of vertices reached, the source included.
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// Vertices in pre-order discovery sequence.
    pub fn order(&self) -> &[Vertex] {
        &self.order
    }
}

impl Paths for DepthFirstPaths<'_> {
    fn source(&self) -> Vertex {
        self.source
    }

    fn has_path_to(&self, v: Vertex) -> Result<bool> {
        self.graph.check_vertex(v)?;
        Ok(self.marked[v])
    }

    fn path_to(&self, v: Vertex) -> Result<Vec<Vertex>> {
        if !self.has_path_to(v)? {
            return Ok(Vec::new());
        }
        Ok(reconstruct_path(&self.edge_to, self.source, v))
    }
}

/// Breadth-first search tree rooted at a single source.
///
/// Paths follow parent pointers, so every `path_to(v)` has exactly
/// `distance_to(v)` edges: a shortest path by hop count.
#[derive(Debug)]
pub struct BreadthFirstPaths<'g> {
    graph: &'g Graph,
    source: Vertex,
    marked: Vec<bool>,
    edge_to: Vec<Vertex>,
    dist_to: Vec<usize>,
    reached: usize,
}

impl<'g> BreadthFirstPaths<'g> {
    pub fn new(graph: &'g Graph, source: Vertex) -> Result<Self> {
        graph.check_vertex(source)?;

        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to: Vec<Vertex> = (0..n).collect();
        let mut dist_to = vec![UNREACHED; n];
        let mut queue: VecDeque<Vertex> = VecDeque::new();

        marked[source] = true;
        dist_to[source] = 0;
        queue.push_back(source);
        let mut reached = 1;

        while let Some(current) = queue.pop_front() {
            for edge in graph.adj(current) {
                let w = edge.w;
                if !marked[w] {
                    marked[w] = true;
                    edge_to[w] = current;
                    dist_to[w] = dist_to[current] + 1;
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }

        debug!(source, reached, "breadth-first search complete");

        Ok(Self {
            graph,
            source,
            marked,
            edge_to,
            dist_to,
            reached,
        })
    }

    /// Minimum number of edges from the source to `v`; `None` when unreached.
    pub fn distance_to(&self, v: Vertex) -> Result<Option<usize>> {
        self.graph.check_vertex(v)?;
        Ok(match self.dist_to[v] {
            UNREACHED => None,
            d => Some(d),
        })
    }

    pub fn reached_count(&self) -> usize {
        self.reached
    }
}

impl Paths for BreadthFirstPaths<'_> {
    fn source(&self) -> Vertex {
        self.source
    }

    fn has_path_to(&self, v: Vertex) -> Result<bool> {
        self.graph.check_vertex(v)?;
        Ok(self.marked[v])
    }

    fn path_to(&self, v: Vertex) -> Result<Vec<Vertex>> {
        if !self.has_path_to(v)? {
            return Ok(Vec::new());
        }
        Ok(reconstruct_path(&self.edge_to, self.source, v))
    }
}
