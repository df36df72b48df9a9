use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::traversal::dfs_walk;

/// Connected-component labeling of a whole graph.
///
/// Vertices are scanned in ascending order and each unlabeled one seeds a
/// depth-first walk, so component `k` is the one whose lowest vertex was the
/// `k`-th seed. Component 0 always contains vertex 0.
#[derive(Debug)]
pub struct ConnectedComponents<'g> {
    graph: &'g Graph,
    id: Vec<usize>,
    count: usize,
}

impl<'g> ConnectedComponents<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut id = vec![0; n];
        let mut count = 0;

        for v in graph.vertices() {
            if marked[v] {
                continue;
            }
            dfs_walk(graph, v, &mut marked, |w, _| id[w] = count);
            count += 1;
        }

        debug!(vertices = n, components = count, "component labeling complete");

        Self { graph, id, count }
    }

    /// Number of connected components; 0 for the empty graph.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn component_of(&self, v: Vertex) -> Result<usize> {
        self.graph.check_vertex(v)?;
        Ok(self.id[v])
    }

    /// Component id of every vertex, indexed by vertex.
    pub(crate) fn ids(&self) -> &[usize] {
        &self.id
    }

    pub fn are_connected(&self, v: Vertex, w: Vertex) -> Result<bool> {
        Ok(self.component_of(v)? == self.component_of(w)?)
    }

    /// Members of every component, indexed by component id, ascending within.
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let mut members = vec![Vec::new(); self.count];
        for (v, &c) in self.id.iter().enumerate() {
            members[c].push(v);
        }
        members
    }

    /// Component sizes, indexed by component id.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &c in &self.id {
            sizes[c] += 1;
        }
        sizes
    }
}
