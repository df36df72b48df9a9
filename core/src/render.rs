use std::fmt;

use crate::graph::Graph;

const RULE: &str = "---------------------------------------------";

/// Plain listing: a header line, then one `v -- w` line per edge.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges.",
            self.vertex_count(),
            self.edge_count()
        )?;
        writeln!(f, "{RULE}")?;
        for edge in self.all_edges() {
            writeln!(f, "  {} -- {}", edge.v, edge.w)?;
        }
        writeln!(f, "{RULE}")
    }
}

/// Graphviz rendering of a graph, via `Display`.
///
/// Vertices with no edges are emitted as bare node statements so they still
/// show up in the drawing.
pub struct Dot<'g>(pub &'g Graph);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "graph {{")?;
        writeln!(f, "  node [shape=circle];")?;
        for v in graph.vertices() {
            if graph.adj(v).is_empty() {
                writeln!(f, "  {v};")?;
            }
        }
        for edge in graph.all_edges() {
            writeln!(f, "  {} -- {};", edge.v, edge.w)?;
        }
        writeln!(f, "}}")
    }
}
