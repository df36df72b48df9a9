use std::io::{self, Write};

use serde::Serialize;
use undigraph_core::{
    BreadthFirstPaths, ConnectedComponents, DepthFirstPaths, Dot, Edge, Graph, Paths,
    Properties, Result, Vertex,
};

use crate::config::Settings;

/// One target vertex in a DFS or BFS listing.
#[derive(Debug, Clone, Serialize)]
pub struct PathRow {
    pub target: Vertex,
    pub reachable: bool,
    /// Hop count; only BFS rows carry it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    pub path: Vec<Vertex>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairCheck {
    pub v: Vertex,
    pub w: Vertex,
    pub connected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentSummary {
    pub count: usize,
    /// Component id of each vertex.
    pub ids: Vec<usize>,
    pub members: Vec<Vec<Vertex>>,
    pub pairs: Vec<PairCheck>,
}

/// Everything the CLI prints, in serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub edges: Vec<Edge>,
    pub degrees: Vec<usize>,
    pub properties: Properties,
    pub components: ComponentSummary,
    /// Absent when the graph has no vertices to start from.
    pub source: Option<Vertex>,
    pub dfs: Vec<PathRow>,
    pub bfs: Vec<PathRow>,
}

impl Report {
    /// Run every analysis over `graph`.
    ///
    /// Fails if the configured source or a connectivity pair names a vertex
    /// outside the graph. An empty graph skips the path listings instead.
    pub fn build(graph: &Graph, settings: &Settings) -> Result<Self> {
        let degrees = graph
            .vertices()
            .map(|v| graph.degree(v))
            .collect::<Result<Vec<_>>>()?;

        let cc = ConnectedComponents::new(graph);
        let ids = graph
            .vertices()
            .map(|v| cc.component_of(v))
            .collect::<Result<Vec<_>>>()?;
        let pairs = settings
            .pairs
            .iter()
            .map(|&(v, w)| -> Result<PairCheck> {
                Ok(PairCheck {
                    v,
                    w,
                    connected: cc.are_connected(v, w)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let (source, dfs, bfs) = if graph.vertex_count() == 0 {
            (None, Vec::new(), Vec::new())
        } else {
            let dfs = DepthFirstPaths::new(graph, settings.source)?;
            let bfs = BreadthFirstPaths::new(graph, settings.source)?;
            (
                Some(settings.source),
                path_rows(graph, &dfs, |_| Ok(None))?,
                path_rows(graph, &bfs, |v| bfs.distance_to(v))?,
            )
        };

        Ok(Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            edges: graph.all_edges(),
            degrees,
            properties: Properties::with_components(graph, &cc),
            components: ComponentSummary {
                count: cc.count(),
                ids,
                members: cc.components(),
                pairs,
            },
            source,
            dfs,
            bfs,
        })
    }

    /// Human-readable report. `graph` supplies the text and dot renderings.
    pub fn write_text<W: Write>(
        &self,
        graph: &Graph,
        settings: &Settings,
        out: &mut W,
    ) -> io::Result<()> {
        write!(out, "{graph}")?;
        if settings.dot {
            write!(out, "{}", Dot(graph))?;
        }

        let p = &self.properties;
        writeln!(out, "Eulerian circuit: {}", yes_no(p.eulerian_circuit))?;
        writeln!(out, "Eulerian path: {}", yes_no(p.eulerian_path))?;
        writeln!(out, "Connected: {}", yes_no(p.connected))?;
        writeln!(out, "Bipartite: {}", yes_no(p.bipartite))?;
        writeln!(out, "Complete: {}", yes_no(p.complete))?;
        writeln!(out, "Regular: {}", yes_no(p.regular))?;

        writeln!(out, "Connected components: {}", self.components.count)?;
        for (v, id) in self.components.ids.iter().enumerate() {
            writeln!(out, "Vertex: {v}, Component: {id}")?;
        }
        for pair in &self.components.pairs {
            writeln!(
                out,
                "Vertices {} and {} connected? {}",
                pair.v,
                pair.w,
                yes_no(pair.connected)
            )?;
        }

        let Some(source) = self.source else {
            return Ok(());
        };

        writeln!(out, " ------- DFS -------")?;
        for row in &self.dfs {
            if row.reachable {
                writeln!(out, "Path from {source} to {}: {}", row.target, join(&row.path))?;
            } else {
                writeln!(out, "No path from {source} to {}", row.target)?;
            }
        }

        writeln!(out, " ------- BFS -------")?;
        for row in &self.bfs {
            match (row.reachable, row.distance) {
                (true, Some(d)) => writeln!(
                    out,
                    "Path from {source} to {}: Distance: {d} - {}",
                    row.target,
                    join(&row.path)
                )?,
                _ => writeln!(out, "No path from {source} to {}", row.target)?,
            }
        }
        Ok(())
    }
}

fn path_rows<P, F>(graph: &Graph, engine: &P, distance: F) -> Result<Vec<PathRow>>
where
    P: Paths,
    F: Fn(Vertex) -> Result<Option<usize>>,
{
    graph
        .vertices()
        .map(|v| -> Result<PathRow> {
            Ok(PathRow {
                target: v,
                reachable: engine.has_path_to(v)?,
                distance: distance(v)?,
                path: engine.path_to(v)?,
            })
        })
        .collect()
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

fn join(path: &[Vertex]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
