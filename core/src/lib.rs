//! undigraph-core: In-memory undirected graph analysis.
//!
//! A pure Rust library that keeps an adjacency list over a fixed vertex set
//! and answers reachability, path, and shortest-hop queries from depth-first
//! and breadth-first search, plus connected-component labeling and a few
//! degree-based structural predicates.
//!
//! The graph is built once (directly or from an edge-list file) and then
//! read by analyses that borrow it, so it cannot change underneath them.

mod components;
mod edgelist;
mod error;
mod graph;
mod properties;
mod render;
mod traversal;

pub use components::ConnectedComponents;
pub use edgelist::{parse_edge_list, read_edge_list};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Vertex, MAX_VERTEX_COUNT};
pub use properties::{
    has_eulerian_circuit, has_eulerian_path, is_bipartite, is_complete, is_connected,
    is_regular, two_coloring, Properties,
};
pub use render::Dot;
pub use traversal::{BreadthFirstPaths, DepthFirstPaths, Paths, UNREACHED};
