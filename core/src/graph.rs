use std::ops::Range;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Vertex identifier, always in `0..vertex_count`.
pub type Vertex = usize;

/// Largest vertex count accepted from untrusted input ([`Graph::try_new`] and
/// the edge-list reader). Each vertex costs one adjacency header up front.
pub const MAX_VERTEX_COUNT: usize = 1 << 28;

/// An undirected edge as stored in one endpoint's adjacency list.
///
/// `v` is the endpoint whose list holds this entry, `w` the far side, so
/// `other(v)` is always the forward direction when iterating a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub v: Vertex,
    pub w: Vertex,
}

impl Edge {
    pub fn new(v: Vertex, w: Vertex) -> Self {
        Self { v, w }
    }

    /// The endpoint opposite `vertex`. A self-loop returns `vertex` itself.
    pub fn other(&self, vertex: Vertex) -> Result<Vertex> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex,
                v: self.v,
                w: self.w,
            })
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }

    fn reversed(self) -> Self {
        Self {
            v: self.w,
            w: self.v,
        }
    }
}

/// In-memory undirected graph over a fixed vertex set.
///
/// Each edge is stored twice, as `(v, w)` in `adj[v]` and `(w, v)` in `adj[w]`,
/// while `edge_count` counts it once. Edges are append-only; there is no
/// removal, so analyses can hold a shared borrow for as long as they live.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// Graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            adj: vec![Vec::new(); vertex_count],
        }
    }

    /// Signed constructor for counts that come from untrusted input.
    ///
    /// Rejects negative counts and counts above [`MAX_VERTEX_COUNT`], and
    /// reports a failed allocation as an error instead of aborting.
    pub fn try_new(vertex_count: i64) -> Result<Self> {
        let count =
            usize::try_from(vertex_count).map_err(|_| GraphError::NegativeVertexCount(vertex_count))?;
        let too_large = || GraphError::VertexCountTooLarge {
            requested: vertex_count,
            max: MAX_VERTEX_COUNT,
        };
        if count > MAX_VERTEX_COUNT {
            return Err(too_large());
        }

        let mut adj = Vec::new();
        adj.try_reserve_exact(count).map_err(|_| too_large())?;
        adj.resize_with(count, Vec::new);
        Ok(Self {
            vertex_count: count,
            edge_count: 0,
            adj,
        })
    }

    /// Pre-allocate adjacency lists for roughly `degree_hint` edges per vertex.
    pub fn with_capacity(vertex_count: usize, degree_hint: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            adj: (0..vertex_count)
                .map(|_| Vec::with_capacity(degree_hint))
                .collect(),
        }
    }

    /// Build a graph by replaying `edges` through [`Graph::add_edge`] in order.
    pub fn from_edge_list<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new(vertex_count);
        graph.load_edges(edges)?;
        Ok(graph)
    }

    /// Insert every pair in order. Stops at the first invalid endpoint;
    /// edges before it stay inserted.
    pub fn load_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        for (v, w) in edges {
            self.add_edge(v, w)?;
        }
        Ok(())
    }

    /// Add the undirected edge `v`-`w`.
    ///
    /// Both endpoints are validated before anything is written, so a
    /// rejected edge leaves the graph unchanged.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> Result<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        let edge = Edge::new(v, w);
        self.adj[v].push(edge);
        self.adj[w].push(edge.reversed());
        self.edge_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> Range<Vertex> {
        0..self.vertex_count
    }

    /// Edges incident on `v`, in insertion order.
    pub fn neighbors(&self, v: Vertex) -> Result<&[Edge]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Number of adjacency entries of `v`. A self-loop contributes two.
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.neighbors(v).map(|edges| edges.len())
    }

    /// Every undirected edge once, as `(a, b)` with `a < b`.
    ///
    /// Ordered by `a`, then by insertion order within `a`'s list. Self-loops
    /// never satisfy `a < b` and are therefore not listed.
    pub fn all_edges(&self) -> Vec<Edge> {
        self.adj
            .iter()
            .flatten()
            .filter(|e| e.v < e.w)
            .copied()
            .collect()
    }

    pub(crate) fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Adjacency without bounds checks, for traversal loops that only ever
    /// see vertices already validated or read from the graph itself.
    pub(crate) fn adj(&self, v: Vertex) -> &[Edge] {
        &self.adj[v]
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adj.capacity() * size_of::<Vec<Edge>>();
        let edges: usize = self
            .adj
            .iter()
            .map(|list| list.capacity() * size_of::<Edge>())
            .sum();

        size_of::<Self>() + lists + edges
    }
}
