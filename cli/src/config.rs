use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use undigraph_core::Vertex;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "UNDIGRAPH_LOG";

/// Default filter when `UNDIGRAPH_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "undigraph=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Analyze an undirected graph stored as an edge list.
///
/// The file holds the vertex count, the edge count, then one `v w` pair per
/// edge. Lines may carry `#` comments.
#[derive(Debug, Clone, Parser)]
#[command(name = "undigraph", version)]
pub struct Settings {
    /// Edge-list file to load
    pub file: PathBuf,

    /// Source vertex for the DFS and BFS path listings
    #[arg(short, long, default_value_t = 0)]
    pub source: Vertex,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include the Graphviz rendering in the text report
    #[arg(long)]
    pub dot: bool,

    /// Vertex pair to test for connectivity, as `A,B` (repeatable)
    #[arg(long = "connected", value_name = "A,B", value_parser = parse_pair)]
    pub pairs: Vec<(Vertex, Vertex)>,
}

impl Settings {
    /// Settings for `file` with every other option at its default.
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            source: 0,
            format: OutputFormat::default(),
            dot: false,
            pairs: Vec::new(),
        }
    }
}

/// Parse `A,B` into a vertex pair.
pub fn parse_pair(s: &str) -> Result<(Vertex, Vertex), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected A,B but got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<Vertex>()
            .map_err(|_| format!("'{}' is not a vertex id", part.trim()))
    };
    Ok((parse(a)?, parse(b)?))
}
